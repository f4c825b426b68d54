use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;

/// 以名稱索引、由 JSON 建立的物件註冊表。
///
/// 每個 JSON 物件需帶 `"name"` 欄位，其餘欄位交給 `get_obj_from_json` 解析。
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_cell.borrow().is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map_cell.borrow().contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map_cell
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    pub fn insert(&self, name: &str, value: V) {
        self.map_cell.borrow_mut().insert(name.to_owned(), value);
    }

    fn named_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        Ok((named_object.name().to_owned(), v))
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let (name, v) = self.named_obj_from_json(json_value)?;
        debug!("registered '{}'", name);
        self.map_cell.borrow_mut().insert(name, v);
        Ok(())
    }

    /// 全部解析成功才寫入；任一筆失敗時註冊表維持原狀
    pub fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let entries = json_vec
            .iter()
            .map(|j| self.named_obj_from_json(j.clone()))
            .collect::<Result<Vec<(String, V)>, ManagerError>>()?;
        let mut map = self.map_cell.borrow_mut();
        for (name, v) in entries {
            debug!("registered '{}'", name);
            map.insert(name, v);
        }
        Ok(())
    }

    /// 檔案內容可以是單一物件或物件陣列
    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.insert_from_json_value(json_value)
    }

    pub fn insert_from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}
