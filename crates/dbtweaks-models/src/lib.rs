pub mod base_class;
pub mod edit;
pub mod globals;
pub mod item;
pub mod report;
pub mod server_config;
pub mod tables;
pub mod trader;

pub use base_class::BaseClass;
pub use edit::{Edit, InsuranceField, PatchProfile};
pub use globals::{Globals, GlobalsConfig, RagFairConfig};
pub use item::{ItemProps, ItemTemplate};
pub use report::{EditOutcome, PatchReport};
pub use server_config::{ConfigType, HideoutConfig, InsuranceConfig};
pub use tables::{DatabaseTables, Templates};
pub use trader::{Trader, TraderBase, TraderInsurance};
