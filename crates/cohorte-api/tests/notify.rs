use cohorte_api::notify::{
    BroadcastNotifier, CatalogEvent, Notification, NotificationLevel, Notifier, StoreEvent,
};

#[tokio::test]
async fn broadcast_reaches_every_subscriber() {
    let notifier = BroadcastNotifier::default();
    let mut first = notifier.subscribe();
    let mut second = notifier.subscribe();

    notifier.catalog_changed(CatalogEvent::QuestionDeleted { id: 3 });

    let expected = StoreEvent::CatalogChanged(CatalogEvent::QuestionDeleted { id: 3 });
    assert_eq!(first.recv().await.unwrap(), expected);
    assert_eq!(second.recv().await.unwrap(), expected);
}

#[tokio::test]
async fn zero_capacity_still_delivers() {
    let notifier = BroadcastNotifier::new(0);
    let mut receiver = notifier.subscribe();

    notifier.catalog_changed(CatalogEvent::Cleared);

    assert_eq!(
        receiver.recv().await.unwrap(),
        StoreEvent::CatalogChanged(CatalogEvent::Cleared)
    );
}

#[test]
fn publishing_without_subscribers_is_harmless() {
    BroadcastNotifier::new(4).notify(Notification::error("offline"));
}

#[test]
fn events_serialize_with_type_tags() {
    let event = StoreEvent::Notification(Notification::success("ok"));
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "notification");
    assert_eq!(json["payload"]["level"], "success");

    let json = serde_json::to_value(StoreEvent::CatalogChanged(CatalogEvent::Loaded {
        question_count: 2,
    }))
    .unwrap();
    assert_eq!(json["payload"]["kind"], "loaded");
    assert_eq!(json["payload"]["question_count"], 2);
    assert_eq!(Notification::error("x").level, NotificationLevel::Error);
}
