mod widget;

pub use widget::CartWidget;
