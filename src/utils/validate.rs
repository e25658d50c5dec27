use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 成绩输入的预期范围
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 必填文本：None 或全空白视为缺失
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// 解析 `YYYY-MM-DD`，允许带时间部分的 ISO 时间戳
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let head = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

pub fn validate_date(value: &str) -> Result<(), &'static str> {
    // 表单只接受纯日期
    if NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err() {
        return Err("Date must use the YYYY-MM-DD format");
    }
    Ok(())
}

/// 只用于告警，超出范围的成绩仍按原值参与计算
pub fn score_in_range(score: f64) -> bool {
    (SCORE_MIN..=SCORE_MAX).contains(&score)
}
