//! 配置相关的宏定义
//!
//! 为可注册组件生成 From / TryFrom / Box 转换

/// 为配置类型实现 From trait
///
/// 支持两种模式：
/// 1. `impl_from!(ConfigType => Type)` - 调用 Type::new(config)
/// 2. `impl_from!(ConfigType => Type, field: config)` - 使用 Self { config }
#[macro_export]
macro_rules! impl_from {
    ($config_type:ty => $target_type:ty) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                <$target_type>::new(config)
            }
        }
    };

    ($config_type:ty => $target_type:ty, field: $field:ident) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                Self { $field: config }
            }
        }
    };
}

/// 为构造可能失败的类型实现 TryFrom trait
///
/// 用法：`impl_try_from!(ConfigType => Type)`，要求 `Type::new(config) -> anyhow::Result<Type>`
#[macro_export]
macro_rules! impl_try_from {
    ($config_type:ty => $target_type:ty) => {
        impl TryFrom<$config_type> for $target_type {
            type Error = anyhow::Error;

            fn try_from(config: $config_type) -> Result<Self, Self::Error> {
                <$target_type>::new(config)
            }
        }
    };
}

/// 为 Box<T> 实现到 Box<dyn Trait> 的转换
///
/// 用法：`impl_box_from!(Type => dyn TraitName)`
#[macro_export]
macro_rules! impl_box_from {
    ($source_type:ty => dyn $trait_name:path) => {
        impl From<Box<$source_type>> for Box<dyn $trait_name> {
            fn from(source: Box<$source_type>) -> Self {
                source as Box<dyn $trait_name>
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone)]
    struct SinkConfig {
        path: String,
    }

    #[derive(Debug)]
    struct PathSink {
        config: SinkConfig,
    }

    impl PathSink {
        fn new(config: SinkConfig) -> Self {
            Self { config }
        }
    }

    #[derive(Debug)]
    struct RawSink {
        config: SinkConfig,
    }

    #[derive(Debug)]
    struct CheckedSink {
        path: String,
    }

    impl CheckedSink {
        fn new(config: SinkConfig) -> anyhow::Result<Self> {
            if config.path.is_empty() {
                anyhow::bail!("path is empty");
            }
            Ok(Self { path: config.path })
        }
    }

    trait Named {
        fn name(&self) -> &str;
    }

    impl Named for PathSink {
        fn name(&self) -> &str {
            &self.config.path
        }
    }

    impl_from!(SinkConfig => PathSink);
    impl_from!(SinkConfig => RawSink, field: config);
    impl_try_from!(SinkConfig => CheckedSink);
    impl_box_from!(PathSink => dyn Named);

    #[test]
    fn test_impl_from_new() {
        let sink = PathSink::from(SinkConfig {
            path: "app.log".to_string(),
        });
        assert_eq!(sink.config.path, "app.log");
    }

    #[test]
    fn test_impl_from_field() {
        let sink = RawSink::from(SinkConfig {
            path: "raw.log".to_string(),
        });
        assert_eq!(sink.config.path, "raw.log");
    }

    #[test]
    fn test_impl_try_from() {
        let ok = CheckedSink::try_from(SinkConfig {
            path: "ok.log".to_string(),
        });
        assert_eq!(ok.unwrap().path, "ok.log");

        let err = CheckedSink::try_from(SinkConfig {
            path: String::new(),
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_impl_box_from() {
        let sink = PathSink::new(SinkConfig {
            path: "boxed.log".to_string(),
        });
        let boxed: Box<dyn Named> = Box::new(sink).into();
        assert_eq!(boxed.name(), "boxed.log");
    }
}
