//! Roming - 정수 -> 로마 숫자 변환 프로그램

use roming::config::load_config;
use roming::core::converter::{decompose, CLASSIC_MAX};
use roming::validate::{has_overline, is_valid_numeral};
use std::process;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    // 인자가 있으면 인자를, 없으면 설정 파일의 숫자 목록을 변환
    let args: Vec<String> = std::env::args().skip(1).collect();
    let numbers = if args.is_empty() {
        config.numbers.clone()
    } else {
        match parse_numbers(&args) {
            Ok(numbers) => numbers,
            Err(bad) => {
                eprintln!("잘못된 입력: {}", bad);
                eprintln!("사용법: roming [숫자...]");
                process::exit(1);
            }
        }
    };

    for number in numbers {
        // 엄격 모드에서는 표준 형식 범위만 허용
        if config.strict && number > CLASSIC_MAX {
            log::warn!(
                "{}은(는) 표준 형식 범위(최대 {})를 벗어나 건너뜀",
                number,
                CLASSIC_MAX
            );
            continue;
        }

        // 항목별 독립 처리: 하나가 실패해도 나머지는 계속 변환
        let decomposition = match decompose(number) {
            Ok(d) => d,
            Err(e) => {
                log::error!("{} 변환 실패: {}", number, e);
                continue;
            }
        };

        let numeral = decomposition.numeral();

        // 0은 빈 문자열이므로 검증 대상이 아님
        if number > 0 && !is_valid_numeral(&numeral) {
            log::warn!("{}의 변환 결과가 표기 검증을 통과하지 못함: {}", number, numeral);
        }
        if has_overline(&numeral) {
            log::debug!("{}은(는) 윗줄 기호 구간 (4000 이상)", number);
        }

        println!("{} -> {}", number, numeral);

        if config.show_steps {
            for chunk in &decomposition.chunks {
                println!("  {:>4} -> {}", chunk.value, chunk.fragment);
            }
        }
    }
}

/// 명령행 인자를 숫자 목록으로 파싱 (실패 시 문제가 된 인자 반환)
fn parse_numbers(args: &[String]) -> Result<Vec<u32>, String> {
    let mut numbers = Vec::with_capacity(args.len());
    for arg in args {
        match arg.parse::<u32>() {
            Ok(n) => numbers.push(n),
            Err(_) => return Err(arg.clone()),
        }
    }
    Ok(numbers)
}
