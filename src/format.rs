/// 변환 결과를 표시용 문자열로 만든다.
///
/// 절댓값이 0.01 이상이면 소수점 둘째 자리까지 고정 소수점으로 출력한다.
/// 반올림은 `f64`의 실제 이진 값을 기준으로 하며 정확히 중간값이면 짝수 쪽으로
/// 맞춘다(`{:.2}`). 그래서 `1.005`(내부적으로 1.00499...)는 `"1.00"`이 된다.
/// 0.01 미만이면 `"0.00"`이 되지 않도록 반올림 없이 그대로 출력한다.
pub fn format_display_value(value: f64) -> String {
    if value.abs() >= 0.01 {
        format!("{value:.2}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        assert_eq!(format_display_value(0.01), "0.01");
        assert_eq!(format_display_value(-0.01), "-0.01");
        assert_eq!(format_display_value(0.009), "0.009");
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(format_display_value(0.125), "0.12");
        assert_eq!(format_display_value(0.375), "0.38");
    }
}
