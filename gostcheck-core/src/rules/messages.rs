// Finding message templates, kept in one place so tests and renderers can
// refer to them without copying strings around.

// ----- Title page: organization -----
pub const ORGANIZATION_MISSING: &str =
    "Не найдено наименование организации в верхней части титульного листа";
pub const ORGANIZATION_KEYWORDS_MISSING: &str =
    "Наименование организации, возможно, указано не полностью (нет слов МИНИСТЕРСТВО, ФЕДЕРАЛЬНОЕ, АГЕНТСТВО, УНИВЕРСИТЕТ)";

pub fn organization_not_uppercase(line: &str) -> String {
    format!("Наименование организации должно быть набрано прописными буквами: '{line}'")
}

// ----- Title page: metadata -----
pub const UDC_MISSING: &str = "Отсутствует индекс УДК на титульном листе";
pub const UDC_WITHOUT_DIGITS: &str = "Индекс УДК должен содержать цифры";
pub const NIOKTR_REGISTRATION_MISSING: &str =
    "Рекомендуется указать регистрационный номер НИОКТР";

// ----- Title page: approval stamps -----
pub const APPROVAL_STAMP_MISSING: &str = "Отсутствует гриф УТВЕРЖДАЮ на титульном листе";
pub const APPROVAL_STAMP_NOT_UPPERCASE: &str =
    "Гриф УТВЕРЖДАЮ должен быть набран прописными буквами";
pub const APPROVAL_INITIALS_MISSING: &str =
    "После грифа УТВЕРЖДАЮ не найдены инициалы (формат: А.В.)";

// ----- Title page: document type -----
pub const DOCUMENT_TYPE_MISSING: &str =
    "Не найден вид документа (ОТЧЕТ О НАУЧНО-ИССЛЕДОВАТЕЛЬСКОЙ РАБОТЕ)";
pub const DOCUMENT_TYPE_NOT_TWO_LINES: &str =
    "Вид документа должен занимать две строки: 'ОТЧЕТ' и 'О НАУЧНО-ИССЛЕДОВАТЕЛЬСКОЙ РАБОТЕ'";
pub const DOCUMENT_TYPE_NOT_UPPERCASE: &str =
    "Вид документа должен быть набран прописными буквами";

// ----- Title page: place and year -----
pub const YEAR_MISSING: &str = "Не найден год составления отчета на титульном листе";
pub const PLACE_MISSING: &str = "Рекомендуется указать место (город) составления отчета";

pub fn year_in_future(year: i32, current_year: i32) -> String {
    format!("Год на титульном листе ({year}) больше текущего ({current_year})")
}

// ----- Executor list -----
pub const EXECUTORS_NOT_MENTIONED: &str =
    "Не найден структурный элемент \"СПИСОК ИСПОЛНИТЕЛЕЙ\" и на титульном листе нет строки \"Исполнитель:\". \
     Если исполнителей больше двух, добавьте \"СПИСОК ИСПОЛНИТЕЛЕЙ\"";
pub const TITLE_PAGE_EXECUTOR_INITIALS_MISSING: &str =
    "Исполнитель на титульном листе указан, но инициалы не распознаны (формат: А.В.)";
pub const EXECUTOR_ROLE_MISSING: &str =
    "В списке исполнителей отсутствует роль \"Исполнители:\"";
pub const EXECUTOR_INITIALS_MISSING: &str =
    "В списке исполнителей не найдены инициалы (формат: А.В.)";
pub const RESPONSIBLE_EXECUTOR_MISSING: &str =
    "Рекомендуется указать ответственного исполнителя (\"Отв. исполнитель\")";

pub fn too_few_executors(count: usize) -> String {
    format!(
        "В списке исполнителей указано человек: {count}. \
         Если исполнителей не больше двух, их можно указать на титульном листе"
    )
}
