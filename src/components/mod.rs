//! UI Components
//!
//! Reusable Leptos components.

mod app_header;
mod confirm_button;
mod priority_list;
mod quadrant_board;
mod recycle_bin;
mod settings_panel;
mod toast;
mod todo_edit_form;
mod todo_form;
mod todo_item;
mod todo_list;
mod unassigned_stack;

pub use app_header::AppHeader;
pub use confirm_button::ConfirmButton;
pub use priority_list::PriorityList;
pub use quadrant_board::{provide_board_drag, use_board_drag, BoardDrag, QuadrantBoard};
pub use recycle_bin::RecycleBin;
pub use settings_panel::SettingsPanel;
pub use toast::{ToastHost, Toasts};
pub use todo_edit_form::TodoEditForm;
pub use todo_form::TodoForm;
pub use todo_item::{QuadrantBadge, TodoItem};
pub use todo_list::TodoList;
pub use unassigned_stack::UnassignedStack;
