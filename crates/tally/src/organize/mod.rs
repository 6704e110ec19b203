//! Sorting files into folders named after their extension.

mod plan;
mod transfer;

pub use plan::{
    NO_EXTENSION_DIR, OrganizeConfig, OrganizePlan, Organizer, Transfer, TransferMode,
    extension_folder,
};
pub use transfer::{transfer_file, unique_target};
