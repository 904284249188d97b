//! 명령 실행 및 출력 포맷
//!
//! 각 명령은 출력할 문자열을 만들어 돌려줍니다. 출력은 `main` 에서 합니다.

use serde::Serialize;
use smsseg_core::{
    char_slots_utf16, classify_unit, Encoding, GsmCharKind, SegmentCounter, Segmenter, SmsText,
    SplitResult, TextNormalizer,
};
use smsseg_foundation::{CharCountInfo, Error, Result, SelectedCharCount, SmsConfig};

/// 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

// ============================================================================
// count
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountReport {
    selected: SelectedCharCount,
    detail: CharCountInfo,
}

pub fn count(config: &SmsConfig, text: &SmsText, format: OutputFormat) -> Result<String> {
    let detail = SegmentCounter::new(config.capacity).count(text.as_units());
    let selected = detail.selected();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CountReport { selected, detail })?),
        OutputFormat::Text => {
            Ok(format!(
                "encoding:          {}\n\
                 characters:        {}\n\
                 messages:          {}\n\
                 chars per segment: {}\n\
                 remaining:         {}\n\
                 gsm:  {} chars / {} msg\n\
                 ucs2: {} chars / {} msg",
                selected.encoding,
                selected.char_count,
                selected.msg_count,
                selected.chars_per_segment,
                selected.remaining_in_segment(),
                detail.gsm_char_count.char_count,
                detail.gsm_char_count.msg_count,
                detail.ucs2_char_count.char_count,
                detail.ucs2_char_count.msg_count,
            ))
        }
    }
}

// ============================================================================
// split
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitReport<'a> {
    segment_info: &'a SplitResult,
    padded_char_count: usize,
}

pub fn split(config: &SmsConfig, text: &SmsText, format: OutputFormat) -> Result<String> {
    let result = Segmenter::new(config.capacity).split(text.as_units());

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SplitReport {
            segment_info: &result,
            padded_char_count: result.padded_char_count(),
        })?),
        OutputFormat::Text => {
            let total = result.msg_count();
            let mut out = format!(
                "{} part(s), {} encoding, {} bytes / {} chars per segment",
                total, result.encoding, result.bytes_per_segment, result.chars_per_segment
            );
            for (i, part) in result.parts.iter().enumerate() {
                out.push_str(&format!(
                    "\n[{}/{}] {} chars, {} bytes\n{}",
                    i + 1,
                    total,
                    part.char_count,
                    part.byte_count,
                    part.text
                ));
            }
            Ok(out)
        }
    }
}

// ============================================================================
// normalize
// ============================================================================

pub fn normalize(text: &SmsText, replacement: &str) -> String {
    TextNormalizer::new(replacement)
        .normalize(text.as_units())
        .to_string_lossy()
}

// ============================================================================
// classify
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyRow {
    text: SmsText,
    kind: GsmCharKind,
    gsm_slots: usize,
    ucs2_slots: usize,
}

fn classify_rows(text: &SmsText) -> Vec<ClassifyRow> {
    // UCS-2 목록은 surrogate pair 를 한 줄로 합쳐 줌
    char_slots_utf16(text.as_units(), Encoding::Ucs2)
        .into_iter()
        .map(|slot| {
            let units = slot.text.as_units();
            let kind = match units {
                [unit] => classify_unit(*unit),
                _ => GsmCharKind::NotGsm,
            };
            // GSM 으로 강제하면 unit 마다 대체 문자 하나
            let gsm_slots = units.iter().map(|&u| classify_unit(u).gsm_slots()).sum();
            ClassifyRow {
                kind,
                gsm_slots,
                ucs2_slots: slot.slots,
                text: slot.text,
            }
        })
        .collect()
}

fn kind_label(kind: GsmCharKind) -> &'static str {
    match kind {
        GsmCharKind::Standard => "standard",
        GsmCharKind::Extended => "extended",
        GsmCharKind::NotGsm => "not-gsm",
    }
}

pub fn classify(text: &SmsText, format: OutputFormat) -> Result<String> {
    let rows = classify_rows(text);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| {
                format!(
                    "{:<6} {:<9} gsm={} ucs2={}",
                    format!("{:?}", row.text.to_string_lossy()),
                    kind_label(row.kind),
                    row.gsm_slots,
                    row.ucs2_slots
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

// ============================================================================
// input
// ============================================================================

/// 인자 또는 stdin 에서 텍스트 읽기.
///
/// stdin 은 마지막 줄바꿈 하나를 떼어냅니다 (`echo` 파이프용).
pub fn read_input(arg: Option<String>, mut stdin: impl std::io::Read) -> Result<SmsText> {
    if let Some(text) = arg {
        return Ok(SmsText::from(text));
    }

    let mut bytes = Vec::new();
    stdin.read_to_end(&mut bytes)?;
    let mut text = String::from_utf8(bytes)
        .map_err(|e| Error::InvalidInput(format!("stdin is not valid UTF-8: {}", e)))?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(SmsText::from(text))
}
