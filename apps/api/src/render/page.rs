//! Full-page HTML for the merit statement form and its result.

use std::fmt::Write as _;

use crate::merit::form::FormInput;
use crate::merit::parser::{emphasize_labels, GenerationResult};
use crate::merit::prompts::{DETAILS_LABEL, SUMMARY_LABEL};
use crate::render::markdown::{escape_html, markdown_to_html};
use crate::session::Session;

pub const PAGE_TITLE: &str = "공적조서 생성기 📜";

const STYLESHEET: &str = r#"
body { background-color: #f8f9fa; font-family: 'Nanum Gothic', sans-serif; max-width: 760px; margin: 0 auto; padding: 24px; color: #2c3e50; }
h1 { text-align: center; font-size: 2.5em; margin-bottom: 1.5em; }
.instructions { background-color: #e9ecef; padding: 20px; border-radius: 10px; margin-bottom: 25px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
.input-section { background-color: #ffffff; padding: 25px; border-radius: 10px; margin-bottom: 20px; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05); }
.section-title { font-weight: bold; margin: 15px 0 10px 0; font-size: 1.1em; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 12px 24px; }
label { display: block; font-size: 0.95em; margin-bottom: 4px; }
input[type=text], textarea { width: 100%; box-sizing: border-box; padding: 8px; border: 1px solid #ced4da; border-radius: 5px; font: inherit; }
textarea { height: 150px; }
.merit-item { background-color: #f8f9fa; padding: 15px; border-radius: 8px; margin-bottom: 10px; }
.button-container { display: flex; justify-content: flex-start; gap: 10px; margin: 10px 0; }
button { padding: 0.5rem 1rem; border: none; border-radius: 5px; color: white; cursor: pointer; }
.add-button { background-color: #28a745; }
.remove-button { background-color: #dc3545; }
.reset-button { background-color: #6c757d; }
.generate-button { background-color: #007bff; font-weight: bold; padding: 0.75em 1.5em; width: 100%; margin-top: 20px; }
.warning-text { color: #856404; background-color: #fff3cd; border: 1px solid #ffeeba; padding: 10px; border-radius: 5px; margin: 10px 0; }
.merit-content { background-color: #ffffff; padding: 20px; border-radius: 10px; border: 1px solid #dee2e6; margin: 20px 0; line-height: 1.8; }
.merit-title { font-weight: bold; margin-bottom: 10px; font-size: 1.2em; }
.merit-text { line-height: 1.8; }
"#;

const INSTRUCTIONS_PANEL: &str = r#"<div class="instructions">
  <h3>📝 사용 방법</h3>
  <ol>
    <li>기본 정보를 입력해주세요</li>
    <li>공적사항을 추가하거나 삭제할 수 있습니다</li>
    <li>각 항목은 구체적인 내용을 포함해주세요:
      <ul>
        <li>활동 기간</li>
        <li>주요 성과와 실적</li>
        <li>영향과 기여도</li>
        <li>관련 기관명</li>
      </ul>
    </li>
  </ol>
</div>"#;

struct FieldSpec {
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
}

const LEFT_FIELDS: [FieldSpec; 3] = [
    FieldSpec { name: "name", label: "성명 👤", placeholder: "성명을 입력하세요" },
    FieldSpec { name: "organization", label: "소속 🏢", placeholder: "소속기관을 입력하세요" },
    FieldSpec { name: "department", label: "부서 📋", placeholder: "부서명을 입력하세요" },
];

const RIGHT_FIELDS: [FieldSpec; 2] = [
    FieldSpec { name: "position", label: "직위 💼", placeholder: "직위를 입력하세요" },
    FieldSpec { name: "tenure", label: "재직기간 📅", placeholder: "예: 2020.03.01 ~ 현재" },
];

/// Renders the whole page for the session's current state.
pub fn render_page(session: &Session) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{PAGE_TITLE}</h1>\n"));
    body.push_str(INSTRUCTIONS_PANEL);
    body.push('\n');
    body.push_str(&render_form(session));
    if let Some(error) = &session.error {
        body.push_str(&format!(
            "<div class=\"warning-text\" role=\"alert\">{}</div>\n",
            escape_html(error)
        ));
    }
    if let Some(result) = &session.result {
        body.push_str(&render_result(result));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n<style>{STYLESHEET}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn render_form(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("<form method=\"post\" action=\"/\">\n");
    let _ = writeln!(
        out,
        "<input type=\"hidden\" name=\"session_id\" value=\"{}\">",
        session.id
    );

    out.push_str("<div class=\"input-section\">\n<div class=\"section-title\">기본 정보</div>\n");
    out.push_str("<div class=\"columns\">\n<div>\n");
    for field in &LEFT_FIELDS {
        out.push_str(&render_text_input(field, &session.form));
    }
    out.push_str("</div>\n<div>\n");
    for field in &RIGHT_FIELDS {
        out.push_str(&render_text_input(field, &session.form));
    }
    out.push_str("</div>\n</div>\n</div>\n");

    out.push_str("<div class=\"input-section\">\n<div class=\"section-title\">공적 사항</div>\n");
    out.push_str(
        "<div class=\"button-container\">\
         <button type=\"submit\" name=\"action\" value=\"add\" class=\"add-button\">➕ 항목 추가</button>\
         <button type=\"submit\" name=\"action\" value=\"remove\" class=\"remove-button\">➖ 항목 삭제</button>\
         </div>\n",
    );
    for (i, merit) in session.entries.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "<div class=\"merit-item\"><label for=\"merit_{i}\">공적사항 {n}</label>\
             <textarea id=\"merit_{i}\" name=\"merit\" placeholder=\"구체적인 공적 내용을 입력해주세요. (기간, 성과, 영향 등 포함)\">{value}</textarea></div>",
            n = i + 1,
            value = escape_html(merit),
        );
    }
    out.push_str("</div>\n");

    out.push_str(
        "<button type=\"submit\" name=\"action\" value=\"generate\" class=\"generate-button\">공적조서 생성하기 ✨</button>\n\
         <div class=\"button-container\">\
         <button type=\"submit\" name=\"action\" value=\"reset\" class=\"reset-button\">처음부터 다시 작성</button>\
         </div>\n",
    );
    out.push_str("</form>\n");
    out
}

fn render_text_input(field: &FieldSpec, form: &FormInput) -> String {
    let value = match field.name {
        "name" => &form.name,
        "organization" => &form.organization,
        "department" => &form.department,
        "position" => &form.position,
        _ => &form.tenure,
    };
    format!(
        "<label for=\"{name}\">{label}</label>\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\">\n",
        name = field.name,
        label = field.label,
        value = escape_html(value),
        placeholder = field.placeholder,
    )
}

/// Summary is shown as generated; details get the bold-label pass first.
pub fn render_result(result: &GenerationResult) -> String {
    format!(
        "<div class=\"merit-content\">\n\
         <div class=\"merit-title\">{SUMMARY_LABEL}</div>\n\
         <div class=\"merit-text\">{summary}</div>\n<br>\n\
         <div class=\"merit-title\">{DETAILS_LABEL}</div>\n\
         <div class=\"merit-text\">{details}</div>\n\
         </div>\n",
        summary = markdown_to_html(&result.summary),
        details = markdown_to_html(&emphasize_labels(&result.details)),
    )
}
