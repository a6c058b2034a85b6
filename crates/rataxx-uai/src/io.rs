use std::io::{self, Write};

/// UAIプロトコルに沿って標準出力へ行を出力するヘルパ。
pub fn uai_println(s: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{s}");
    let _ = out.flush();
}

/// `info string ...` の出力ユーティリティ。
pub fn info_string<S: AsRef<str>>(s: S) {
    uai_println(&format!("info string {}", s.as_ref()));
}
