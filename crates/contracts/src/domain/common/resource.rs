use crate::shared::notification::ToastCategory;
use serde::de::DeserializeOwned;

/// REST-ресурс, доступный через CRUD эндпоинты `{base}{collection_path}`.
///
/// Статические метаданные, которые нужны обобщённому REST клиенту и UI:
/// путь коллекции, имена для заголовков и категория уведомлений.
pub trait Resource: DeserializeOwned + Clone + 'static {
    /// Путь коллекции относительно базового URL API (например, "/tickets")
    fn collection_path() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Ключ массива в конверте ответа списка (`{"tickets": [...]}`)
    fn list_key() -> &'static str;

    /// Ключ записи в конверте ответа на create / update (`{"ticket": {...}}`)
    fn item_key() -> &'static str;

    /// Категория toast уведомлений для операций над ресурсом
    fn toast_category() -> ToastCategory {
        ToastCategory::System
    }

    /// Путь конкретной записи (например, "/tickets/42")
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::collection_path(), urlencoding::encode(id))
    }
}
