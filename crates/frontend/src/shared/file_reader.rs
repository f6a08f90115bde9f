use crate::pages::landing::state::SelectedImage;

/// Читает выбранный пользователем файл целиком
pub async fn read_selected_image(file: web_sys::File) -> Result<SelectedImage, String> {
    use wasm_bindgen_futures::JsFuture;

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Ошибка чтения файла: {:?}", e))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    Ok(SelectedImage {
        name: file.name(),
        mime: file.type_(),
        bytes,
    })
}
