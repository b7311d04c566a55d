use crate::records::Record;

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn record_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "<p class=\"empty\">No users yet.</p>\n".to_string();
    }
    let mut out = String::from("<ul class=\"users\">\n");
    for r in records {
        out.push_str(&format!(
            "  <li data-id=\"{}\">{}: {} ({})</li>\n",
            r.id,
            r.id,
            escape_html(&r.name),
            r.age
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}

pub fn index_page(records: &[Record]) -> String {
    let form = "<form action=\"/uploadfile/\" method=\"post\" enctype=\"multipart/form-data\">\n  \
         <input type=\"file\" name=\"file\" accept=\".csv\" required>\n  \
         <label>id column <input type=\"number\" name=\"id_col\" value=\"0\" min=\"0\"></label>\n  \
         <label>name column <input type=\"number\" name=\"name_col\" value=\"1\" min=\"0\"></label>\n  \
         <label>age column <input type=\"number\" name=\"age_col\" value=\"2\" min=\"0\"></label>\n  \
         <button type=\"submit\">Upload</button>\n</form>\n";
    page("Users", &format!("{}{}", record_list(records), form))
}

pub fn result_page(records: &[Record]) -> String {
    page(
        "Upload results",
        &format!("{}<p><a href=\"/\">Back</a></p>\n", record_list(records)),
    )
}
