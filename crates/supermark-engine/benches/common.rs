// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "Paragraph with a^2^ + b^2^ = c^2^ and a [[Wiki Link|link]].\nSecond line with x^n+1^ and `code ^not^`.\n\n```rust\nlet x = y ^ z;\n```\n\n";
    base.repeat(size)
}

/// Caret-heavy text where most carets never close.
#[allow(dead_code)]
pub fn generate_caret_noise(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!("a^{i} b ^ c^^{i}^ d^{i}~{i}^ e^ {i}^\n"));
    }
    content
}
