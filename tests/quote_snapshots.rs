//! Snapshot coverage for batch escaping
//!
//! Renders a realistic block of build-setting values the way a project-file
//! serializer would emit them, one escaped token per line.

use pbxtok::pbx::quote::escape;

#[test]
fn build_settings_sample() {
    let tokens = [
        "PRODUCT_NAME",
        "My App",
        "Sources/main.m",
        "$(SRCROOT)/Vendor",
        "DEBUG=1",
    ];
    let rendered: Vec<String> = tokens.iter().map(|t| escape(t)).collect();

    insta::assert_snapshot!(rendered.join("\n"), @r###"
    PRODUCT_NAME
    "My App"
    "Sources/main.m"
    "$(SRCROOT)/Vendor"
    "DEBUG=1"
    "###);
}
