//! 정수 -> 로마 숫자 통합 변환기

use crate::core::bounds::StepBounds;
use crate::core::chunk::{classify, processing_number, render_chunk, ChunkCase};
use crate::core::symbol::SYMBOL_TABLE;

/// 표준 형식으로 표기 가능한 최대값 (윗줄 기호가 필요 없는 구간)
pub const CLASSIC_MAX: u32 = 3999;

/// 변환 가능한 최대 입력
///
/// 최상위 청크가 테이블 최대 기호(5000)를 넘으면 상한을 찾을 수 없다.
/// 6000부터는 처리 숫자가 6000 이상이 되므로 5999가 한계다.
pub const MAX_CONVERTIBLE: u32 = 5999;

/// 변환 에러
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// 처리 숫자가 기호 테이블 범위를 벗어남
    OutOfTableRange {
        /// 상한 기호를 찾지 못한 처리 숫자
        processing_number: u32,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::OutOfTableRange { processing_number } => write!(
                f,
                "처리 숫자 {}이(가) 기호 테이블 범위를 벗어남 (최대 입력: {})",
                processing_number, MAX_CONVERTIBLE
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

/// 분해 단계 하나의 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 처리 숫자 (최상위 자릿수 청크)
    pub value: u32,
    /// 렌더링 방식
    pub case: ChunkCase,
    /// 렌더링된 부분 문자열
    pub fragment: String,
}

/// 입력 전체의 분해 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// 원본 입력
    pub number: u32,
    /// 자릿수 청크 목록 (큰 자리부터)
    pub chunks: Vec<Chunk>,
}

impl Decomposition {
    /// 청크 조각을 순서대로 이어 붙인 최종 로마 숫자
    pub fn numeral(&self) -> String {
        self.chunks.iter().map(|c| c.fragment.as_str()).collect()
    }
}

/// 정수를 자릿수 청크 단위로 분해
///
/// 남은 값에서 최상위 자릿수 청크를 반복해서 떼어낸다.
/// 남은 값이 1 이상이면 청크도 1 이상이므로 루프는 항상 종료한다.
/// 0은 빈 분해를 반환한다.
///
/// # Examples
/// ```
/// use roming::decompose;
///
/// let d = decompose(1958).unwrap();
/// let values: Vec<u32> = d.chunks.iter().map(|c| c.value).collect();
/// assert_eq!(values, vec![1000, 900, 50, 8]);
/// assert_eq!(d.numeral(), "MCMLVIII");
/// ```
pub fn decompose(number: u32) -> Result<Decomposition, ConvertError> {
    let mut chunks = Vec::new();
    let mut remaining = number;

    while remaining > 0 {
        let pn = processing_number(remaining);

        let bounds = StepBounds::resolve(pn, &SYMBOL_TABLE).ok_or(ConvertError::OutOfTableRange {
            processing_number: pn,
        })?;

        let case = classify(pn, &bounds);
        let fragment = render_chunk(pn, &bounds, case);

        chunks.push(Chunk {
            value: pn,
            case,
            fragment,
        });
        remaining -= pn;
    }

    Ok(Decomposition { number, chunks })
}

/// 정수를 로마 숫자 문자열로 변환
///
/// 0은 빈 문자열을 반환하고, 5999를 넘는 입력은 부분 결과 없이
/// 에러를 돌려준다.
///
/// # Examples
/// ```
/// use roming::to_roman;
///
/// assert_eq!(to_roman(1958).unwrap(), "MCMLVIII");
/// assert_eq!(to_roman(0).unwrap(), "");
/// assert!(to_roman(6000).is_err());
/// ```
pub fn to_roman(number: u32) -> Result<String, ConvertError> {
    decompose(number).map(|d| d.numeral())
}
