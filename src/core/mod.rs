//! 로마 숫자 변환 핵심 모듈
//!
//! 정수를 로마 숫자 표기로 바꾸는 변환 파이프라인입니다.
//!
//! # 개요
//!
//! 변환은 네 단계로 동작합니다:
//!
//! 1. **처리 숫자 추출**: 남은 값의 최상위 자릿수 청크를 계산 (`chunk`)
//! 2. **경계 탐색**: 기호 테이블에서 상한/하한/이전 하한/일치 기호를 선택 (`bounds`)
//! 3. **분류와 렌더링**: 네 가지 표기 방식 중 하나로 청크 문자열 생성 (`chunk`)
//! 4. **반복 축소**: 남은 값이 0이 될 때까지 반복하며 조각을 이어 붙임 (`converter`)
//!
//! # 사용 예시
//!
//! ```
//! use roming::core::{decompose, to_roman};
//!
//! assert_eq!(to_roman(1958).unwrap(), "MCMLVIII");
//!
//! // 분해 과정 확인
//! let d = decompose(58).unwrap();
//! let fragments: Vec<&str> = d.chunks.iter().map(|c| c.fragment.as_str()).collect();
//! assert_eq!(fragments, vec!["L", "VIII"]);
//! ```

pub mod bounds;
pub mod chunk;
pub mod converter;
pub mod symbol;

pub use bounds::{select_bound, BoundKind, ScanDirection, StepBounds};
pub use chunk::{classify, processing_number, render_chunk, ChunkCase};
pub use converter::{decompose, to_roman, Chunk, ConvertError, Decomposition};
pub use symbol::{Symbol, SymbolTable, SYMBOL_TABLE};
