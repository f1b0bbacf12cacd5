use anyhow::{anyhow, bail};
use log::{error, info, warn};
use outcome::Outcome;

pub const DEFAULT_CONFIG: &str = "default.yaml";
pub const DEFAULT_CONTENT: &str = "user: guest\nrole: viewer";

/// Named scenarios runnable from the command line.
pub const SCENARIOS: &[(&str, fn())] = &[
    ("simple", || {
        simple();
    }),
    ("checking", || {
        checking();
    }),
    ("chaining", || {
        chaining();
    }),
    ("chaining-then", || {
        chaining_then();
    }),
    ("side-effects", || {
        side_effects(2);
        side_effects(0);
    }),
    ("must-and-or", || {
        must_and_or();
    }),
    ("complex", || {
        complex("config.yaml");
    }),
];

fn process_data(data: &str) -> anyhow::Result<String> {
    if data.is_empty() {
        bail!("empty data");
    }
    Ok(format!("processed: {}", data))
}

fn double(x: i32) -> anyhow::Result<i32> {
    Ok(x * 2)
}

fn fail_if_odd(x: i32) -> anyhow::Result<i32> {
    if x % 2 != 0 {
        bail!("odd number");
    }
    Ok(x)
}

fn process_value(x: i32) -> Outcome<i32> {
    if x < 0 {
        return Outcome::failure(anyhow!("negative value"));
    }
    Outcome::success(x * 2)
}

fn validate_range(x: i32) -> Outcome<i32> {
    if x > 100 {
        return Outcome::failure(anyhow!("value too large"));
    }
    Outcome::success(x)
}

fn divide(a: i32, b: i32) -> anyhow::Result<i32> {
    if b == 0 {
        bail!("division by zero");
    }
    Ok(a / b)
}

fn get_config() -> anyhow::Result<String> {
    bail!("config not found")
}

fn read_file(filename: &str) -> anyhow::Result<String> {
    if filename.is_empty() {
        bail!("empty filename");
    }
    Ok("user: admin\nrole: superuser".to_string())
}

fn validate_content(content: String) -> anyhow::Result<String> {
    if content.is_empty() {
        bail!("empty content");
    }
    if !content.contains("user:") {
        bail!("invalid format");
    }
    Ok(content)
}

fn normalize_content(content: String) -> anyhow::Result<String> {
    let normalized = content.trim();
    if normalized.is_empty() {
        bail!("content is empty after normalization");
    }
    Ok(normalized.to_string())
}

pub fn simple() -> (i32, Option<anyhow::Error>) {
    let (value, err) = Outcome::success(10).unwrap_pair();
    match &err {
        Some(e) => error!("simple - error: {}", e),
        None => info!("simple - value: {}", value),
    }
    (value, err)
}

pub fn checking() -> (Outcome<String>, Outcome<String>) {
    let result = Outcome::from(process_data("hello"));
    if let Some(value) = result.as_success() {
        info!("checking - success: {}", value);
    }
    if let Some(e) = result.error() {
        error!("checking - error: {}", e);
    }

    let fail_result = Outcome::from(process_data(""));
    if let Some(e) = fail_result.error() {
        info!("checking - failed as expected: {}", e);
    }
    (result, fail_result)
}

pub fn chaining() -> Outcome<i32> {
    let result = Outcome::success(10)
        .then_try(double)
        .then_try(fail_if_odd);

    let (value, err) = result.unwrap_pair();
    info!("chaining - value: {}, error: {:?}", value, err);
    Outcome::from_pair(value, err)
}

pub fn chaining_then() -> Outcome<i32> {
    Outcome::success(10)
        .then(process_value)
        .then(validate_range)
        .on_success(|value| info!("chaining_then - value: {}", value))
        .on_failure(|e| error!("chaining_then - error: {}", e))
}

pub fn side_effects(divisor: i32) -> Outcome<i32> {
    Outcome::from(divide(10, divisor))
        .on_success(|value| info!("side_effects - success: {}", value))
        .on_failure(|e| error!("side_effects - error occurred: {}", e))
        .always(|| info!("side_effects - operation completed"))
}

pub fn must_and_or() -> (&'static str, String, String) {
    let value = Outcome::<&str>::success("success").unwrap_or_panic();
    info!("must_and_or - value: {}", value);

    let config = Outcome::from(get_config()).unwrap_or(DEFAULT_CONFIG.to_string());
    info!("must_and_or - using config: {}", config);

    let custom = Outcome::<String>::success("custom.yaml".to_string())
        .unwrap_or(DEFAULT_CONFIG.to_string());
    info!("must_and_or - using config: {}", custom);

    (value, config, custom)
}

pub fn complex(filename: &str) -> String {
    let result = Outcome::from(read_file(filename))
        .on_success(|_| info!("complex - file read successfully"))
        .then_try(validate_content)
        .on_success(|_| info!("complex - content validated"))
        .then_try(normalize_content)
        .on_failure(|e| error!("complex - processing failed: {}", e))
        .always(|| info!("complex - operation completed"));

    if result.is_success() {
        let content = result.value();
        info!("complex - final content: {:?}", content);
        content
    } else {
        warn!("complex - using default: {:?}", DEFAULT_CONTENT);
        DEFAULT_CONTENT.to_string()
    }
}
