//! 자릿수 청크 분류와 렌더링

use crate::core::bounds::StepBounds;
use crate::core::symbol::Symbol;

/// 남은 수의 최상위 자릿수 청크(처리 숫자) 계산
///
/// 최상위 자릿수를 자릿값 그대로 돌려준다.
/// 예: 1958 -> 1000, 958 -> 900, 58 -> 50, 8 -> 8
/// 0은 0을 반환한다 (변환 루프는 0을 전달하지 않음).
pub fn processing_number(number: u32) -> u32 {
    if number == 0 {
        return 0;
    }

    // 10^floor(log10(number))을 정수 연산으로 계산
    let mut base = 1u32;
    while number / base >= 10 {
        base *= 10;
    }

    (number / base) * base
}

/// 청크 렌더링 방식
///
/// 아래 순서대로 판정하며, 순서 자체가 계약이다:
/// 감산 표기(Subtractive)는 가산 조건(RepeatLower/LowerThenPrev)보다
/// 먼저 검사해야 한다 (9는 VIIII가 아니라 IX).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkCase {
    /// pn이 테이블에 있는 값 그 자체 (1000 -> M)
    Tabled,
    /// 감산 표기: 보정 기호 + 상한 (9 -> IX, 40 -> XL, 900 -> CM)
    Subtractive(Symbol),
    /// 하한 글리프 반복 (3 -> III, 20 -> XX)
    RepeatLower,
    /// 하한 한 번 + 이전 하한 반복 (8 -> VIII, 70 -> LXX)
    LowerThenPrev,
}

/// 처리 숫자와 경계로 렌더링 방식 분류
pub fn classify(pn: u32, bounds: &StepBounds) -> ChunkCase {
    // 1: 상한 == 하한이면 pn이 테이블 값
    if bounds.upper.value == bounds.lower.value {
        return ChunkCase::Tabled;
    }

    // 2: 상한 - pn이 테이블에 있으면 감산 표기
    if let Some(exact) = bounds.exact {
        if bounds.upper.value - pn == exact.value {
            return ChunkCase::Subtractive(exact);
        }
    }

    // 3: 상한과 하한의 간격이 pn보다 크면 하한 반복으로 충분
    if bounds.upper.value - bounds.lower.value > pn {
        return ChunkCase::RepeatLower;
    }

    // 4: 그 외에는 하한 + 이전 하한 반복
    ChunkCase::LowerThenPrev
}

/// 분류된 방식에 따라 청크 문자열 생성
///
/// pn >= 1이면 항상 비어 있지 않은 문자열을 만든다.
pub fn render_chunk(pn: u32, bounds: &StepBounds, case: ChunkCase) -> String {
    match case {
        ChunkCase::Tabled => bounds.upper.glyph.to_string(),
        ChunkCase::Subtractive(prefix) => format!("{}{}", prefix.glyph, bounds.upper.glyph),
        ChunkCase::RepeatLower => {
            let count = pn / bounds.lower.value;
            bounds.lower.glyph.repeat(count as usize)
        }
        ChunkCase::LowerThenPrev => {
            let count = (pn - bounds.lower.value) / bounds.prev_lower.value;
            let mut fragment = bounds.lower.glyph.to_string();
            fragment.push_str(&bounds.prev_lower.glyph.repeat(count as usize));
            fragment
        }
    }
}
