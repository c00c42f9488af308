pub mod block_editor;
pub mod diagnostics;
pub mod divider;
pub mod document_view;
pub mod editors;
pub mod empty_document;
pub mod error_screen;
pub mod figure;
pub mod gallery;
pub mod heading;
pub mod insert_menu;
pub mod list_block;
pub mod main_panel;
pub mod new_post_form;
pub mod paragraph;
pub mod post_list;
pub mod post_list_item;
pub mod product;
pub mod quote;
pub mod raw_markup;
pub mod upload_field;
pub mod video;

pub use block_editor::BlockEditor;
pub use diagnostics::{InvalidBlock, RenderError, UnknownBlock};
pub use divider::Divider;
pub use document_view::DocumentView;
pub use empty_document::EmptyDocument;
pub use error_screen::ErrorScreen;
pub use figure::ImageBlock;
pub use gallery::Gallery;
pub use heading::Heading;
pub use insert_menu::InsertMenu;
pub use list_block::ListBlock;
pub use main_panel::MainPanel;
pub use new_post_form::NewPostForm;
pub use paragraph::Paragraph;
pub use post_list::PostList;
pub use product::ProductCard;
pub use quote::Quote;
pub use raw_markup::RawMarkup;
pub use upload_field::PostsRoot;
pub use video::Video;
