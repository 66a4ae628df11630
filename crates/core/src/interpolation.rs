use std::collections::{HashMap, HashSet};

use leon::Template;

use crate::error::{Error, Result};

pub const MODULE_PATH_KEY: &str = "module_path";
pub const MODULE_NAME_KEY: &str = "module_name";
pub const DRILL_ID_KEY: &str = "drill_id";

/// Bootstrap entry used when the config does not provide one.
pub const DEFAULT_BOOTSTRAP_TEMPLATE: &str = r"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from '{module_path}'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
)
";

/// Find all tokens used by a template.
pub fn get_tokens(template: &Template) -> HashSet<String> {
    template.keys().map(|key| (*key).to_string()).collect()
}

/// Parses a bootstrap template and checks it imports the drill somehow.
///
/// # Errors
///
/// Returns an error if the template does not parse, or references neither
/// `{module_path}` nor `{module_name}`.
pub fn get_bootstrap_template(source: &str) -> Result<Template<'_>> {
    let template = Template::parse(source)?;
    let tokens = get_tokens(&template);

    if !tokens.contains(MODULE_PATH_KEY) && !tokens.contains(MODULE_NAME_KEY) {
        return Err(Error::TemplateWithoutModule);
    }

    Ok(template)
}

pub fn build_bootstrap_context(
    module_path: &str,
    module_name: &str,
    drill_id: &str,
) -> HashMap<String, String> {
    HashMap::from([
        (MODULE_PATH_KEY.to_string(), module_path.to_string()),
        (MODULE_NAME_KEY.to_string(), module_name.to_string()),
        (DRILL_ID_KEY.to_string(), drill_id.to_string()),
    ])
}

/// Renders the bootstrap entry contents.
///
/// # Errors
///
/// Returns an error if the template is invalid or uses an unknown key.
pub fn render_bootstrap(source: &str, context: &HashMap<String, String>) -> Result<String> {
    let template = get_bootstrap_template(source)?;
    Ok(template.render(context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> HashMap<String, String> {
        build_bootstrap_context("./drills/13_state", "13_state", "13")
    }

    #[test]
    fn test_default_template_renders_import() {
        let rendered = render_bootstrap(DEFAULT_BOOTSTRAP_TEMPLATE, &context()).unwrap();

        assert!(rendered.contains("import App from './drills/13_state'\n"));
        assert!(rendered.contains("<React.StrictMode>"));
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn test_custom_template_with_module_name() {
        let rendered = render_bootstrap("import Drill{drill_id} from './{module_name}'", &context())
            .unwrap();
        assert_eq!(rendered, "import Drill13 from './13_state'");
    }

    #[test]
    fn test_template_without_module() {
        let result = render_bootstrap("console.log('{drill_id}')", &context());
        assert!(matches!(result, Err(Error::TemplateWithoutModule)));
    }

    #[test]
    fn test_template_with_unknown_key() {
        let result = render_bootstrap("import App from '{module_path}{unknown}'", &context());
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_get_tokens() {
        let template = Template::parse("{module_path} {drill_id} {drill_id}").unwrap();
        let tokens = get_tokens(&template);
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("module_path"));
        assert!(tokens.contains("drill_id"));
    }
}
