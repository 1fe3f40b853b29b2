pub mod anthropometrie;
pub mod cardio_vasculaire;
pub mod demographie;
pub mod habitudes_de_vie;
pub mod metabolique;
pub mod respiratoire;
