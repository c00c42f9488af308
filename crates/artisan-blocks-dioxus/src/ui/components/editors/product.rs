use artisan_blocks_engine::registry;
use artisan_blocks_engine::{BlockData, BlockTag, ProductData, UploadSlot};
use dioxus::prelude::*;

use super::calculate_textarea_rows;
use crate::ui::components::upload_field::{UploadField, UploadResult};

#[derive(Clone, Copy)]
enum ProductField {
    Id,
    Title,
    Description,
    Image,
}

fn with_field(data: &ProductData, field: ProductField, value: String) -> ProductData {
    let mut next = data.clone();
    match field {
        ProductField::Id => next.product_id = value,
        ProductField::Title => next.title = value,
        ProductField::Description => next.description = value,
        ProductField::Image => next.image = value,
    }
    next
}

#[component]
pub fn ProductEditor(
    data: ProductData,
    on_change: EventHandler<BlockData>,
    on_upload: EventHandler<UploadResult>,
) -> Element {
    let rows = calculate_textarea_rows(&data.description);
    let edit = |field: ProductField| {
        let data = data.clone();
        let on_change = on_change;
        move |evt: Event<FormData>| {
            on_change.call(BlockData::Product(with_field(&data, field, evt.value())));
        }
    };

    rsx! {
        div {
            class: "product-editor",
            input {
                r#type: "text",
                value: "{data.product_id}",
                placeholder: registry::info(BlockTag::Product).placeholder,
                oninput: edit(ProductField::Id),
            }
            input {
                r#type: "text",
                value: "{data.title}",
                placeholder: "Title",
                oninput: edit(ProductField::Title),
            }
            textarea {
                class: "editor-textarea",
                value: "{data.description}",
                rows: rows,
                placeholder: "Description",
                oninput: edit(ProductField::Description),
            }
            input {
                r#type: "text",
                value: "{data.image}",
                placeholder: "Image URL",
                oninput: edit(ProductField::Image),
            }
            UploadField { slot: UploadSlot::ProductImage, label: "Upload image".to_string(), on_upload }
        }
    }
}
