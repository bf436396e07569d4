//! 로마 숫자 기호 테이블

use lazy_static::lazy_static;

/// 테이블에 정의된 기호 개수
pub const SYMBOL_COUNT: usize = 8;

/// 로마 숫자 기호 (정수 값 - 글리프 쌍)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// 기호가 나타내는 정수 값
    pub value: u32,
    /// 표기 글리프 (5000은 V + 결합 윗줄 U+0305)
    pub glyph: &'static str,
}

/// 로마 숫자 기호 테이블
///
/// 값 오름차순으로 정렬된 8개 기호를 보관한다.
/// 생성 이후 변경되지 않으므로 여러 변환이 동시에 읽어도 안전하다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: [Symbol; SYMBOL_COUNT],
}

impl SymbolTable {
    /// 고정 기호 테이블 생성
    ///
    /// 입력이 없고 실패하지 않으며, 호출할 때마다 같은 테이블을 반환한다.
    pub fn new() -> Self {
        Self {
            symbols: [
                Symbol { value: 1, glyph: "I" },
                Symbol { value: 5, glyph: "V" },
                Symbol { value: 10, glyph: "X" },
                Symbol { value: 50, glyph: "L" },
                Symbol { value: 100, glyph: "C" },
                Symbol { value: 500, glyph: "D" },
                Symbol { value: 1000, glyph: "M" },
                Symbol { value: 5000, glyph: "V\u{305}" }, // V̄
            ],
        }
    }

    /// 기호 슬라이스 반환 (값 오름차순)
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// 값이 가장 큰 기호 반환
    pub fn largest(&self) -> Symbol {
        self.symbols[SYMBOL_COUNT - 1]
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    /// 전역 기호 테이블
    ///
    /// 읽기 전용이므로 동기화 없이 공유한다.
    pub static ref SYMBOL_TABLE: SymbolTable = SymbolTable::new();
}
