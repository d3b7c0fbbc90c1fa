// ==========================================
// 教師員額控管系統 - 系统设定
// ==========================================
// 存储: settings.json
// 红线: admin_password 不得出现在任何对外读取结果中
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ADMIN_PASSWORD_KEY: &str = "admin_password";

/// 系统设定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
    /// 其他设定键，原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppSettings {
    /// 对外可见的设定（去除管理员密码）
    pub fn public_view(&self) -> Value {
        let mut map = self.extra.clone();
        map.remove(ADMIN_PASSWORD_KEY);
        if let Some(year) = self.school_year {
            map.insert("school_year".to_string(), Value::from(year));
        }
        Value::Object(map)
    }
}
