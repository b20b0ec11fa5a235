use include_dir::{include_dir, Dir};
use minijinja::{context, Environment, Error};
use once_cell::sync::Lazy;
use tracing::error;

static TEMPLATE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

pub static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();

    for entry in TEMPLATE_DIR
        .find("**/*.html")
        .expect("Unable to walk Template Directory")
    {
        let Some(file) = entry.as_file() else {
            continue;
        };
        let Some(name) = file.path().to_str() else {
            continue;
        };
        let contents = String::from_utf8_lossy(file.contents()).to_string();
        if let Err(e) = env.add_template_owned(name.to_string(), contents) {
            handle_template_error(e);
        }
    }

    env
});

pub fn render_error_page(title: &str, detail: &str) -> String {
    ENV.get_template("body/error.html")
        .and_then(|template| {
            template.render(context!(
                title => title,
                detail => detail,
            ))
        })
        .unwrap_or_else(handle_template_error)
}

pub fn handle_template_error(err: Error) -> String {
    error!("Could not render template: {:#}", err);
    // log causes as well
    let mut err = &err as &dyn std::error::Error;
    while let Some(next_err) = err.source() {
        error!("caused by: {:#}", next_err);
        err = next_err;
    }
    String::from("<h1>Error rendering Template</h1></br> See the logs for more information")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_escapes_detail() {
        let page = render_error_page("Failed to delete folder", "<script>");
        assert!(page.contains("Failed to delete folder"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
