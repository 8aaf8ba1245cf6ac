mod delete_dialog;
mod details;
mod list;

pub use list::ProductListPage;
