use serde::Deserialize;

/// 設定檔中每個具名物件都帶有的 `"name"` 欄位
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
