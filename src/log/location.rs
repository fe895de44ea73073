//! 调用位置
//!
//! 公共日志入口全部标注 `#[track_caller]`，`Location::caller()` 因此指向第一个未标注的调用帧，
//! 也就是用户代码中的日志调用处。在外层再包一层日志函数时，给包装函数同样加上
//! `#[track_caller]`，位置就会继续向外传递。

use std::panic::Location;

/// 无法确定调用位置时使用的文本
pub const LOCATION_UNKNOWN: &str = "location: path could not be found";

/// 获取调用位置
#[track_caller]
pub fn caller() -> &'static Location<'static> {
    Location::caller()
}

/// 将调用位置渲染为 trace 中的最后一项
pub fn locate(location: Option<&Location<'_>>) -> String {
    match location {
        Some(location) => format!(
            "location: file '{}' on line: {}",
            location.file(),
            location.line()
        ),
        None => LOCATION_UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_current_file() {
        let location = caller();
        let expected_line = line!() - 1;

        let text = locate(Some(location));
        assert_eq!(
            text,
            format!("location: file '{}' on line: {}", file!(), expected_line)
        );
    }

    #[test]
    fn test_locate_fallback() {
        assert_eq!(locate(None), LOCATION_UNKNOWN);
    }

    #[track_caller]
    fn wrapped() -> &'static Location<'static> {
        caller()
    }

    #[test]
    fn test_track_caller_propagates_through_wrapper() {
        let location = wrapped();
        assert_eq!(location.line(), line!() - 1);
        assert_eq!(location.file(), file!());
    }
}
