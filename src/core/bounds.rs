//! 기호 테이블 경계(Bound) 탐색

use crate::core::symbol::{Symbol, SymbolTable};

/// 경계 종류
///
/// 처리 숫자(pn)를 기준으로 테이블에서 기호를 고르는 네 가지 탐색 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    /// pn 이상인 첫 기호 (오름차순 탐색)
    Upper,
    /// pn 이하인 첫 기호 (내림차순 탐색)
    Lower,
    /// pn 미만인 첫 기호 (내림차순 탐색)
    PreviousLower,
    /// pn과 정확히 일치하는 기호 (없을 수 있음)
    Exact,
}

/// 테이블 탐색 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// 작은 값부터 (왼쪽 -> 오른쪽)
    FromLeft,
    /// 큰 값부터 (오른쪽 -> 왼쪽)
    FromRight,
}

impl BoundKind {
    /// 경계 종류별 탐색 방향
    pub fn direction(&self) -> ScanDirection {
        match self {
            BoundKind::Upper | BoundKind::Exact => ScanDirection::FromLeft,
            BoundKind::Lower | BoundKind::PreviousLower => ScanDirection::FromRight,
        }
    }

    /// 기호 값이 경계 조건을 만족하는지 확인
    pub fn matches(&self, value: u32, pn: u32) -> bool {
        match self {
            BoundKind::Upper => value >= pn,
            BoundKind::Lower => value <= pn,
            BoundKind::PreviousLower => value < pn,
            BoundKind::Exact => value == pn,
        }
    }
}

/// 탐색 방향을 따라 조건을 만족하는 첫 기호 반환
///
/// Upper는 pn이 테이블 최대값(5000)을 넘으면 None.
/// Exact는 일치 기호가 없으면 None.
pub fn select_bound(pn: u32, kind: BoundKind, table: &SymbolTable) -> Option<Symbol> {
    let symbols = table.symbols();

    match kind.direction() {
        ScanDirection::FromLeft => symbols.iter().find(|s| kind.matches(s.value, pn)).copied(),
        ScanDirection::FromRight => symbols
            .iter()
            .rev()
            .find(|s| kind.matches(s.value, pn))
            .copied(),
    }
}

/// 한 분해 단계에서 사용하는 네 경계 기호
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBounds {
    /// 상한: pn 이상인 첫 기호
    pub upper: Symbol,
    /// 하한: pn 이하인 첫 기호
    pub lower: Symbol,
    /// 이전 하한: 하한 바로 아래 단계의 기호
    pub prev_lower: Symbol,
    /// 상한 - pn 값과 일치하는 기호 (감산 표기 후보)
    pub exact: Option<Symbol>,
}

impl StepBounds {
    /// 처리 숫자에 대한 네 경계를 한 번에 계산
    ///
    /// pn이 테이블 범위를 벗어나 상한을 찾지 못하면 None.
    pub fn resolve(pn: u32, table: &SymbolTable) -> Option<StepBounds> {
        let upper = select_bound(pn, BoundKind::Upper, table)?;
        let lower = select_bound(pn, BoundKind::Lower, table)?;

        // 하한이 최소 기호(1)면 그 미만 기호가 없으므로 5로 보정해서 조회
        let prev_query = lower.value.max(5);
        let prev_lower = select_bound(prev_query, BoundKind::PreviousLower, table)?;

        // 상한에서 pn을 뺀 값이 테이블에 있으면 감산 표기 가능 (9 -> IX)
        let exact = select_bound(upper.value - pn, BoundKind::Exact, table);

        Some(StepBounds {
            upper,
            lower,
            prev_lower,
            exact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_directions() {
        assert_eq!(BoundKind::Upper.direction(), ScanDirection::FromLeft);
        assert_eq!(BoundKind::Exact.direction(), ScanDirection::FromLeft);
        assert_eq!(BoundKind::Lower.direction(), ScanDirection::FromRight);
        assert_eq!(BoundKind::PreviousLower.direction(), ScanDirection::FromRight);
    }

    #[test]
    fn test_predicates() {
        assert!(BoundKind::Upper.matches(10, 9));
        assert!(BoundKind::Upper.matches(9, 9));
        assert!(!BoundKind::Upper.matches(5, 9));

        assert!(BoundKind::Lower.matches(5, 9));
        assert!(!BoundKind::Lower.matches(10, 9));

        assert!(BoundKind::PreviousLower.matches(5, 9));
        assert!(!BoundKind::PreviousLower.matches(9, 9));

        assert!(BoundKind::Exact.matches(9, 9));
        assert!(!BoundKind::Exact.matches(10, 9));
    }

    #[test]
    fn test_select_upper() {
        let table = SymbolTable::new();

        // 900 이상인 첫 기호는 1000
        assert_eq!(select_bound(900, BoundKind::Upper, &table).map(|s| s.value), Some(1000));
        // 정확히 테이블에 있는 값은 자기 자신
        assert_eq!(select_bound(50, BoundKind::Upper, &table).map(|s| s.value), Some(50));
        // 테이블 최대값(5000)을 넘으면 없음
        assert_eq!(select_bound(6000, BoundKind::Upper, &table), None);
    }

    #[test]
    fn test_select_lower() {
        let table = SymbolTable::new();

        assert_eq!(select_bound(900, BoundKind::Lower, &table).map(|s| s.value), Some(500));
        assert_eq!(select_bound(50, BoundKind::Lower, &table).map(|s| s.value), Some(50));
        // 1 이하는 항상 최소 기호 1
        assert_eq!(select_bound(1, BoundKind::Lower, &table).map(|s| s.value), Some(1));
    }

    #[test]
    fn test_select_exact() {
        let table = SymbolTable::new();

        assert_eq!(select_bound(100, BoundKind::Exact, &table).map(|s| s.glyph), Some("C"));
        // 테이블에 없는 값은 None
        assert_eq!(select_bound(3, BoundKind::Exact, &table), None);
        assert_eq!(select_bound(0, BoundKind::Exact, &table), None);
    }

    #[test]
    fn test_resolve_tabled_value() {
        let table = SymbolTable::new();
        let bounds = StepBounds::resolve(1000, &table).unwrap();

        // 테이블에 있는 값은 상한 == 하한
        assert_eq!(bounds.upper.value, 1000);
        assert_eq!(bounds.lower.value, 1000);
        assert_eq!(bounds.prev_lower.value, 500);
    }

    #[test]
    fn test_resolve_subtractive_candidate() {
        let table = SymbolTable::new();

        // 9: 상한 10, 하한 5, 10 - 9 = 1이 테이블에 있음
        let bounds = StepBounds::resolve(9, &table).unwrap();
        assert_eq!(bounds.upper.value, 10);
        assert_eq!(bounds.lower.value, 5);
        assert_eq!(bounds.exact.map(|s| s.value), Some(1));

        // 900: 1000 - 900 = 100 (C)
        let bounds = StepBounds::resolve(900, &table).unwrap();
        assert_eq!(bounds.exact.map(|s| s.glyph), Some("C"));

        // 7: 10 - 7 = 3은 테이블에 없음
        let bounds = StepBounds::resolve(7, &table).unwrap();
        assert_eq!(bounds.exact, None);
    }

    #[test]
    fn test_resolve_prev_lower_clamp() {
        let table = SymbolTable::new();

        // 하한이 1인 구간(pn 1~4)은 5로 보정해서 이전 하한 1을 얻음
        let bounds = StepBounds::resolve(3, &table).unwrap();
        assert_eq!(bounds.lower.value, 1);
        assert_eq!(bounds.prev_lower.value, 1);

        // 하한 5 -> 이전 하한 1
        let bounds = StepBounds::resolve(8, &table).unwrap();
        assert_eq!(bounds.prev_lower.value, 1);

        // 하한 50 -> 이전 하한 10
        let bounds = StepBounds::resolve(80, &table).unwrap();
        assert_eq!(bounds.prev_lower.value, 10);
    }

    #[test]
    fn test_resolve_out_of_table() {
        let table = SymbolTable::new();
        assert!(StepBounds::resolve(6000, &table).is_none());
        assert!(StepBounds::resolve(9000, &table).is_none());
    }
}
