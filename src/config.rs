//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Roming 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RomingConfig {
    /// 인자 없이 실행했을 때 변환할 숫자 목록
    #[serde(default = "default_numbers")]
    pub numbers: Vec<u32>,
    /// 표준 형식 범위(3999 이하)만 허용할지 여부
    #[serde(default)]
    pub strict: bool,
    /// 자릿수 청크별 분해 과정을 함께 출력할지 여부
    #[serde(default)]
    pub show_steps: bool,
}

fn default_numbers() -> Vec<u32> {
    vec![1958]
}

impl Default for RomingConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            strict: false,
            show_steps: false,
        }
    }
}

/// 설정 파일 경로: ~/.config/roming/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("roming").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RomingConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| {
            RomingConfig::default()
        }),
        Err(_) => RomingConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &RomingConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RomingConfig::default();
        assert_eq!(config.numbers, vec![1958]);
        assert!(!config.strict);
        assert!(!config.show_steps);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = RomingConfig {
            numbers: vec![4, 90, 2024],
            strict: true,
            show_steps: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RomingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.numbers, vec![4, 90, 2024]);
        assert!(parsed.strict);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 numbers가 없는 경우 기본값 사용
        let json = r#"{"strict": true}"#;
        let config: RomingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.numbers, vec![1958]);
        assert!(config.strict);
        assert!(!config.show_steps);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        // HOME을 임시 디렉토리로 돌려 실제 저장/로드 경로를 검증
        let home = std::env::temp_dir().join("roming_config_test");
        fs::create_dir_all(&home).unwrap();
        std::env::set_var("HOME", &home);

        // 파일이 없으면 기본값
        let _ = fs::remove_file(config_path());
        assert_eq!(load_config().numbers, vec![1958]);

        let config = RomingConfig {
            numbers: vec![7, 5999],
            strict: true,
            show_steps: true,
        };
        save_config(&config).unwrap();

        let loaded = load_config();
        assert_eq!(loaded.numbers, vec![7, 5999]);
        assert!(loaded.strict);
        assert!(loaded.show_steps);

        // 파싱할 수 없는 파일이면 기본값
        fs::write(config_path(), "{ not json").unwrap();
        assert_eq!(load_config().numbers, vec![1958]);
    }
}
