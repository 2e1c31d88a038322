//! Full-document regression tests
//!
//! Each test renders a page description and compares the complete
//! document. A two-space indent keeps the snapshots readable.

use html_page::render;

#[test]
fn test_xhtml_strict_document() {
    let html = render(
        r#"
title = "Snapshot"
meta_content_type = true
body = ["<h1>Snapshot</h1>", ["<p>one</p>", "<p>two</p>"]]

[options]
doctype = "XHTML 1.0 Strict"
tab = "  "

[meta]
author = "Someone"

[[stylesheets]]
href = "site.css"
"#,
    )
    .expect("Should render");

    insta::assert_snapshot!(html, @r#"
<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN"
    "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en">
<head>
  <meta http-equiv="Content-Type" content="text/html; charset=utf-8" />
  <meta name="Generator" content="html-page" />
  <meta name="author" content="Someone" />
  <title>Snapshot</title>
  <link rel="stylesheet" href="site.css" type="text/css" />
</head>
<body>
  <h1>Snapshot</h1>
  <p>one</p>
  <p>two</p>
</body>
</html>
"#);
}

#[test]
fn test_legacy_html_document() {
    let html = render(
        r#"
title = "Legacy"
body = ["<p>legacy</p>"]
body_attributes = { onload = "init()" }

[options]
doctype = "HTML 4.01 Strict"
tab = "  "

[[scripts]]
src = "app.js"

[style]
"text/css" = "p { margin: 0 }"

[script]
"text/javascript" = "init();"
"#,
    )
    .expect("Should render");

    insta::assert_snapshot!(html, @r#"
<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN"
    "http://www.w3.org/TR/html4/strict.dtd">
<html>
<head>
  <meta name="Generator" content="html-page">
  <title>Legacy</title>
  <style type="text/css">
    <!--
    p { margin: 0 }
    -->
  </style>
  <script type="text/javascript" src="app.js"></script>
  <script type="text/javascript">
    <!--
    init();
    -->
  </script>
</head>
<body onload="init()">
  <p>legacy</p>
</body>
</html>
"#);
}

#[test]
fn test_xml_served_document() {
    let html = render(
        r#"
xml_prolog = false

[options]
doctype = "XHTML 1.1"
mime = "application/xhtml+xml"
tab = "  "

[script]
"text/javascript" = "if (a < b) { go(); }"
"#,
    )
    .expect("Should render");

    insta::assert_snapshot!(html, @r#"
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en">
<head>
  <meta name="Generator" content="html-page" />
  <title>New XHTML 1.1 Compliant Page</title>
  <script type="text/javascript">
    <![CDATA[
    if (a < b) { go(); }
    ]]>
  </script>
</head>
<body>
</body>
</html>
"#);
}

#[test]
fn test_simple_document() {
    let html = render(
        r#"
body = ["<p>plain</p>"]

[options]
doctype = "none"
tab = "  "
"#,
    )
    .expect("Should render");

    insta::assert_snapshot!(html, @r#"
<html>
<head>
  <meta name="Generator" content="html-page" />
  <title>New Page</title>
</head>
<body>
  <p>plain</p>
</body>
</html>
"#);
}
