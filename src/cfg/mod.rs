//! cfg 模块 - 组件配置
//!
//! 通过 TypeOptions 描述组件，再由注册表按类型名创建 trait object

#[macro_use]
pub mod macros;
pub mod registry;
pub mod type_options;

pub use registry::{create_trait_from_type_options, register_trait};
pub use type_options::TypeOptions;
