//! GSM 03.38 알파벳 분류
//!
//! - `alphabet`: 기본/확장 테이블과 code unit 분류기
//! - `unit`: 분류 결과와 GSM / UCS-2 슬롯 크기를 묶은 `CharUnit`

mod alphabet;
mod unit;

pub use alphabet::{
    classify, classify_unit, is_extended_gsm, is_gsm_char, is_standard_gsm, GsmCharKind,
    GSM_ALPHABET, GSM_ALPHABET_EXTENDED,
};
pub use unit::CharUnit;
