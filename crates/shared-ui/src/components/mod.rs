// Base chrome
pub mod alert_dialog;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod pagination;
pub mod search_bar;
pub mod sheet;
pub mod skeleton;
pub mod toast;

// Record viewers (depend on card, data_table, alert_dialog)
pub mod delete_confirmation;
pub mod expandable_field_list;
pub mod list_viewer;
pub mod record_card;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use delete_confirmation::*;
pub use detail_list::*;
pub use expandable_field_list::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use list_viewer::*;
pub use page_header::*;
pub use pagination::*;
pub use record_card::*;
pub use search_bar::*;
pub use sheet::*;
pub use skeleton::*;
pub use toast::*;
