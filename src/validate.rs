//! 변환 결과 검증 모듈
//!
//! 허용 글리프 검사 및 과다 반복 필터링

/// 문자가 로마 숫자 글리프인지 확인
///
/// 기본 기호 I, V, X, L, C, D, M 과 결합 윗줄(U+0305)만 허용
pub fn is_numeral_char(ch: char) -> bool {
    matches!(ch, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M' | '\u{305}')
}

/// 가장 긴 동일 문자 연속 반복 길이 계산
pub fn max_repeat_run(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        if Some(ch) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(ch);
        }
        longest = longest.max(run);
    }

    longest
}

/// 동일 기호가 과도하게 반복되는지 검사 (threshold: 4회)
/// 표준 표기에서 같은 기호는 최대 3번까지만 연달아 나온다
pub fn has_excessive_repeat(text: &str) -> bool {
    max_repeat_run(text) >= 4
}

/// 결과에 윗줄 기호가 포함되어 있는지 확인 (4000 이상 구간에서만 등장)
pub fn has_overline(text: &str) -> bool {
    text.chars().any(|ch| ch == '\u{305}')
}

/// 변환 결과가 유효한 로마 숫자 표기인지 검증
///
/// - 허용 글리프 외의 문자 포함 시 무효
/// - 윗줄 기호가 V 뒤가 아닌 곳에 오면 무효
/// - 동일 기호 과다 반복 시 무효
pub fn is_valid_numeral(text: &str) -> bool {
    // 1. 빈 문자열은 무효
    if text.is_empty() {
        return false;
    }

    // 2. 허용 글리프 외의 문자 포함 시 무효
    if !text.chars().all(is_numeral_char) {
        return false;
    }

    // 3. 윗줄 기호는 V 바로 뒤에만 올 수 있음
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if ch == '\u{305}' && prev != Some('V') {
            return false;
        }
        prev = Some(ch);
    }

    // 4. 동일 기호 4회 이상 반복 시 무효
    if has_excessive_repeat(text) {
        return false;
    }

    true
}
