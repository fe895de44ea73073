use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// 可记录的值，对应日志调用里的每一个参数
///
/// 第一个参数作为 message（按 Display 转成文本），其余参数按各自的 JSON 形式进入 trace。
/// 相等比较按 JSON 形式进行，`U64(7)`、`I64(7)` 与 `Json(7)` 相等
#[derive(Debug, Clone)]
pub enum LogValue {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Null,
    /// 任意 JSON 兼容的数据，包括由自定义结构体转换而来的值
    Json(Value),
}

impl LogValue {
    /// 从任意实现了 Serialize 的自定义结构体创建 LogValue
    ///
    /// 序列化失败时返回占位字符串，保证记录仍然能够输出
    ///
    /// # 示例
    ///
    /// ```ignore
    /// #[derive(Serialize)]
    /// struct Payment {
    ///     id: i64,
    ///     currency: String,
    /// }
    ///
    /// let value = LogValue::from_struct(&Payment { id: 42, currency: "GBP".into() });
    /// ```
    pub fn from_struct<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(json_value) => LogValue::from(json_value),
            Err(e) => LogValue::String(unserializable(&e)),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LogValue::String(s) => Some(s),
            LogValue::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// 输出时的 JSON 形式，非有限浮点数为 null
    pub fn to_json(&self) -> Value {
        match self {
            LogValue::String(s) => Value::String(s.clone()),
            LogValue::I64(n) => Value::from(*n),
            LogValue::U64(n) => Value::from(*n),
            LogValue::F64(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            LogValue::Bool(b) => Value::Bool(*b),
            LogValue::Null => Value::Null,
            LogValue::Json(v) => v.clone(),
        }
    }
}

impl PartialEq for LogValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LogValue::String(a), LogValue::String(b)) => a == b,
            (LogValue::I64(a), LogValue::I64(b)) => a == b,
            (LogValue::U64(a), LogValue::U64(b)) => a == b,
            (LogValue::Bool(a), LogValue::Bool(b)) => a == b,
            (LogValue::Null, LogValue::Null) => true,
            _ => self.to_json() == other.to_json(),
        }
    }
}

/// 序列化失败时替代原值的占位文本
pub(crate) fn unserializable(err: &dyn fmt::Display) -> String {
    format!("<unserializable: {}>", err)
}

impl Serialize for LogValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LogValue::String(s) => serializer.serialize_str(s),
            LogValue::I64(n) => serializer.serialize_i64(*n),
            LogValue::U64(n) => serializer.serialize_u64(*n),
            LogValue::F64(n) => serializer.serialize_f64(*n),
            LogValue::Bool(b) => serializer.serialize_bool(*b),
            LogValue::Null => serializer.serialize_none(),
            LogValue::Json(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LogValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(LogValue::from)
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::String(s) => f.write_str(s),
            LogValue::I64(n) => write!(f, "{}", n),
            LogValue::U64(n) => write!(f, "{}", n),
            LogValue::F64(n) => write!(f, "{}", n),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Null => f.write_str("null"),
            LogValue::Json(Value::String(s)) => f.write_str(s),
            LogValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::String(s.clone())
    }
}

impl From<i64> for LogValue {
    fn from(n: i64) -> Self {
        LogValue::I64(n)
    }
}

impl From<i32> for LogValue {
    fn from(n: i32) -> Self {
        LogValue::I64(n as i64)
    }
}

// 能放进 i64 的无符号数统一为 I64，与解析结果一致
impl From<u64> for LogValue {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(LogValue::U64(n), LogValue::I64)
    }
}

impl From<u32> for LogValue {
    fn from(n: u32) -> Self {
        LogValue::I64(i64::from(n))
    }
}

impl From<usize> for LogValue {
    fn from(n: usize) -> Self {
        LogValue::from(n as u64)
    }
}

impl From<f64> for LogValue {
    fn from(n: f64) -> Self {
        LogValue::F64(n)
    }
}

impl From<f32> for LogValue {
    fn from(n: f32) -> Self {
        LogValue::F64(n as f64)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(LogValue::Null, Into::into)
    }
}

// 标量 JSON 值还原为对应的变体，解析后的记录与原记录结构一致
impl From<Value> for LogValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => LogValue::Null,
            Value::Bool(b) => LogValue::Bool(b),
            Value::String(s) => LogValue::String(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LogValue::I64(i)
                } else if let Some(u) = n.as_u64() {
                    LogValue::U64(u)
                } else {
                    n.as_f64().map_or(LogValue::Null, LogValue::F64)
                }
            }
            other => LogValue::Json(other),
        }
    }
}
