//! 구조적 배열 집계 (structural tally)
//!
//! 디코딩된 JSON 값 전체를 순회하며, 어느 깊이·어느 키 아래에 있든
//! 발견되는 모든 배열의 길이를 합산합니다.
//!
//! 배열 안의 배열도 각각 집계되므로 `[[1, 2], [3]]`은 `2 + 2 + 1 = 5`입니다.
//! 서로 관계없는 배열 필드도 하나의 숫자로 합쳐집니다. 업스트림 스키마가
//! 고정되어 있지 않아 특정 필드만 세는 방식으로 좁히지 않습니다.
//!
//! # Examples
//!
//! ```rust
//! use query_edge_proxy::utils::tally::tally;
//! use serde_json::json;
//!
//! assert_eq!(tally(&json!({"a": [1, 2], "b": {"c": [3, 4, 5]}})), 5);
//! ```

use std::collections::HashSet;

use serde_json::Value;

/// JSON 값 안의 모든 배열 길이 합을 계산합니다.
///
/// 명시적 스택으로 깊이 우선 순회하므로 중첩 깊이가 호출 스택을 소모하지 않습니다.
/// 이미 방문한 복합 값(배열, 객체)은 주소 기준으로 건너뜁니다.
/// 스칼라 값은 집계에 기여하지 않습니다.
pub fn tally(root: &Value) -> u64 {
    let mut count: u64 = 0;
    let mut seen: HashSet<*const Value> = HashSet::new();
    let mut stack: Vec<&Value> = vec![root];

    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => {
                if !seen.insert(value as *const Value) {
                    continue;
                }
                count += items.len() as u64;
                stack.extend(items.iter());
            }
            Value::Object(map) => {
                if !seen.insert(value as *const Value) {
                    continue;
                }
                stack.extend(map.values());
            }
            _ => {}
        }
    }

    count
}

/// 응답 본문 텍스트를 JSON으로 해석해 집계합니다.
///
/// JSON이 아니면 `None`을 반환합니다. 이 경우 호출자는 집계 헤더를 생략합니다.
///
/// serde_json 파서의 재귀 한도(중첩 128단계)를 넘는 본문도 파싱 실패로 취급되어
/// `None`이 됩니다. 본문 자체는 그대로 전달되고 집계 헤더만 빠집니다.
pub fn tally_text(body: &str) -> Option<u64> {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => Some(tally(&json)),
        Err(e) => {
            log::debug!("응답 본문이 JSON이 아니어서 집계를 건너뜁니다: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_and_flat_arrays() {
        assert_eq!(tally(&json!([])), 0);
        assert_eq!(tally(&json!([1, 2, 3])), 3);
    }

    #[test]
    fn test_arrays_under_any_key_are_summed() {
        assert_eq!(tally(&json!({"a": [1, 2], "b": {"c": [3, 4, 5]}})), 5);
    }

    #[test]
    fn test_nested_arrays_are_double_counted() {
        assert_eq!(tally(&json!([[1, 2], [3]])), 5);
        assert_eq!(tally(&json!({"items": [{"tags": ["a", "b"]}, {"tags": []}]})), 4);
    }

    #[test]
    fn test_scalars_contribute_nothing() {
        assert_eq!(tally(&json!(null)), 0);
        assert_eq!(tally(&json!(42)), 0);
        assert_eq!(tally(&json!("[1,2,3]")), 0);
        assert_eq!(tally(&json!({"a": true, "b": {"c": 1.5}})), 0);
    }

    #[test]
    fn test_result_does_not_depend_on_key_order() {
        let a: Value = serde_json::from_str(r#"{"x":[1],"y":{"z":[1,2]}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"y":{"z":[1,2]},"x":[1]}"#).unwrap();

        assert_eq!(tally(&a), tally(&b));
    }

    #[test]
    fn test_deep_nesting_terminates() {
        let mut value = json!([1]);
        for _ in 0..500 {
            value = json!({ "next": [value] });
        }

        // 래핑 배열 500개(각 길이 1) + 가장 안쪽 배열 1개(길이 1)
        assert_eq!(tally(&value), 501);
    }

    #[test]
    fn test_tally_text() {
        assert_eq!(tally_text(r#"{"items":[1,2,3]}"#), Some(3));
        assert_eq!(tally_text("{}"), Some(0));
        assert_eq!(tally_text("not json"), None);
        assert_eq!(tally_text(""), None);
    }

    #[test]
    fn test_tally_text_beyond_parser_depth_limit_is_none() {
        let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));

        // 바깥 99개 배열은 길이 1, 가장 안쪽 배열은 길이 0
        assert_eq!(tally_text(&nested(100)), Some(99));
        assert_eq!(tally_text(&nested(200)), None);
    }
}
