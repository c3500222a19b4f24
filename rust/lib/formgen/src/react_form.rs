/// React form-field component generator (Ant Design `Form.Item` + `getFieldDecorator`)

use tracing::debug;

use crate::error::{CodegenError, Result};
use crate::ir::*;
use crate::js::string_literal;
use crate::manifest::Manifest;

/// Props every generated component accepts, with their defaults.
const DEFAULT_PROPS: &[(&str, &str)] = &[
    ("itemProps", "{}"),
    ("handleChange", "() => {}"),
    ("onBlur", "() => {}"),
    ("layout", "'vertical'"),
    ("fieldOptions", "{}"),
    ("inputProps", "{}"),
];

/// Prop-type declarations matching `DEFAULT_PROPS`, plus the required `form`.
const PROP_TYPES: &[(&str, &str)] = &[
    ("itemProps", "PropTypes.shape({})"),
    ("handleChange", "PropTypes.func"),
    ("onBlur", "PropTypes.func"),
    ("layout", "PropTypes.oneOf(['horizontal', 'vertical', 'inline'])"),
    ("fieldOptions", "PropTypes.shape({})"),
    ("inputProps", "PropTypes.shape({})"),
    (
        "form",
        "PropTypes.shape({\n    getFieldDecorator: PropTypes.func.isRequired,\n  }).isRequired",
    ),
];

#[derive(Debug, Clone, Default)]
pub struct ReactFormGenerator {
    /// Output file name replacing the model's own; needs exactly one model.
    pub file_name_override: Option<String>,
}

impl ReactFormGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name_override = Some(file_name.into());
        self
    }
}

impl crate::Codegen for ReactFormGenerator {
    fn generate(&self, manifest: &Manifest) -> Result<crate::GeneratedCode> {
        if self.file_name_override.is_some() && manifest.models.len() != 1 {
            return Err(CodegenError::FileNameOverride(manifest.models.len()));
        }

        let mut files = Vec::new();
        for model in &manifest.models {
            let content = render(&model.context)?;
            let file_name = model.file_name(self.file_name_override.as_deref());
            files.push(crate::GeneratedFile {
                path: format!("{}/{}", model.directory(), file_name),
                content,
            });
        }

        Ok(crate::GeneratedCode { files })
    }

    fn language(&self) -> &str {
        "react-antd-form"
    }
}

/// Render `ctx` into the source of one component file.
///
/// The context is validated first. String fields are emitted as escaped
/// literals; `input` markup is inserted as-is.
pub fn render(ctx: &RenderContext) -> Result<String> {
    ctx.validate()?;

    let mut output = String::new();
    render_header(&mut output, ctx);

    let single = ctx.is_single();
    for component in &ctx.components {
        debug!(component = %component.name, field = %component.field_name, "rendering form field");
        output.push('\n');
        render_component(&mut output, component, !single);
        render_static_props(&mut output, &component.name);
    }

    if single {
        output.push_str(&format!("\nexport default {};\n", ctx.components[0].name));
    }

    Ok(output)
}

fn render_header(output: &mut String, ctx: &RenderContext) {
    output.push_str("/* eslint-disable */\n");
    output.push_str("import React from 'react';\n");
    output.push_str("import Form from 'antd/lib/form';\n");
    output.push_str("import PropTypes from 'prop-types';\n");
    for import in &ctx.extra_imports {
        output.push_str(&format!(
            "import {} from {};\n",
            import.name,
            string_literal(&import.path)
        ));
    }
    output.push('\n');

    output.push_str("const { Item } = Form;\n");
    for sub in &ctx.sub_imports {
        output.push_str(&format!("const {{ {} }} = {};\n", sub.name, sub.base));
    }
}

fn render_component(output: &mut String, c: &ComponentSpec, exported: bool) {
    let export = if exported { "export " } else { "" };
    output.push_str(&format!("{}const {} = (props) => {{\n", export, c.name));
    output.push_str("  const { getFieldDecorator } = props.form;\n");
    output.push_str("  const {\n");
    output.push_str("    itemProps, layout, onBlur, fieldOptions, inputProps,\n");
    output.push_str("  } = props;\n");
    output.push_str("  const formItemLayout = layout === 'horizontal' ? {\n");
    output.push_str("    labelCol: { xs: { span: 24 }, sm: { span: 8 } },\n");
    output.push_str("    wrapperCol: { xs: { span: 24 }, sm: { span: 16 } },\n");
    output.push_str("  } : {};\n\n");

    output.push_str("  return (\n");
    output.push_str("    <Item\n");
    output.push_str("      {...itemProps}\n");
    output.push_str("      {...formItemLayout}\n");
    output.push_str(&format!("      label={{{}}}\n", string_literal(&c.label)));
    output.push_str("      colon={false}\n");
    if let Some(help) = &c.help_text {
        output.push_str(&format!("      help={{{}}}\n", string_literal(help)));
    }
    output.push_str("    >\n");

    output.push_str(&format!(
        "      {{getFieldDecorator({}, {{\n",
        string_literal(&c.field_name)
    ));
    output.push_str("        ...fieldOptions,\n");
    if let Some(initial) = &c.initial {
        output.push_str(&format!("        initialValue: {},\n", string_literal(initial)));
    }
    output.push_str(&format!("        rules: [{{ {} }}],\n", rule(c)));
    output.push_str("      })(\n");
    output.push_str(&format!("        {}\n", c.input));
    output.push_str("      )}\n");
    output.push_str("    </Item>\n");
    output.push_str("  );\n");
    output.push_str("};\n");
}

fn rule(c: &ComponentSpec) -> String {
    match &c.message {
        Some(message) => format!("required: {}, message: {}", c.required, string_literal(message)),
        None => format!("required: {}", c.required),
    }
}

fn render_static_props(output: &mut String, name: &str) {
    output.push_str(&format!("\n{}.defaultProps = {{\n", name));
    for (prop, value) in DEFAULT_PROPS {
        output.push_str(&format!("  {}: {},\n", prop, value));
    }
    output.push_str("};\n");

    output.push_str(&format!("\n{}.propTypes = {{\n", name));
    for (prop, ty) in PROP_TYPES {
        output.push_str(&format!("  {}: {},\n", prop, ty));
    }
    output.push_str("};\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> ComponentSpec {
        ComponentSpec::new("EmailField", "email", "<Input />")
            .label("Email")
            .required(true)
    }

    fn single() -> RenderContext {
        let mut ctx = RenderContext::new();
        ctx.add_component(email());
        ctx
    }

    #[test]
    fn single_component_default_export() {
        let out = render(&single()).unwrap();
        assert!(out.contains("\nconst EmailField = (props) => {\n"));
        assert!(!out.contains("export const"));
        assert_eq!(out.matches("export default").count(), 1);
        assert!(out.ends_with("export default EmailField;\n"));
        assert!(!out.contains("help="));
        assert!(out.contains("rules: [{ required: true }],"));
        assert!(out.contains("{getFieldDecorator('email', {"));
    }

    #[test]
    fn multiple_components_named_exports() {
        let mut ctx = single();
        ctx.add_component(ComponentSpec::new("NameField", "name", "<Input />"));
        ctx.add_component(ComponentSpec::new("AgeField", "age", "<InputNumber />"));

        let out = render(&ctx).unwrap();
        assert_eq!(out.matches("export const ").count(), 3);
        assert!(!out.lines().any(|l| l.starts_with("export default")));
        assert!(out.contains("export const AgeField = (props) => {"));
    }

    #[test]
    fn header_and_imports_in_order() {
        let mut ctx = single();
        ctx.add_import("Select", "antd/lib/select");
        ctx.add_import("Input", "antd/lib/input");
        ctx.add_sub_import("Option", "Select");
        ctx.add_sub_import("TextArea", "Input");

        let out = render(&ctx).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "/* eslint-disable */");
        assert_eq!(
            &lines[1..6],
            &[
                "import React from 'react';",
                "import Form from 'antd/lib/form';",
                "import PropTypes from 'prop-types';",
                "import Select from 'antd/lib/select';",
                "import Input from 'antd/lib/input';",
            ]
        );
        assert_eq!(
            &lines[7..10],
            &[
                "const { Item } = Form;",
                "const { Option } = Select;",
                "const { TextArea } = Input;",
            ]
        );
    }

    #[test]
    fn optional_fields_emitted_when_present() {
        let mut ctx = RenderContext::new();
        ctx.add_component(
            email()
                .help_text("We never share it")
                .initial("me@example.com")
                .message("Please enter a valid value for: \"Email\""),
        );

        let out = render(&ctx).unwrap();
        assert!(out.contains("      help={'We never share it'}\n"));
        assert!(out.contains("        initialValue: 'me@example.com',\n"));
        assert!(out.contains(
            "rules: [{ required: true, message: 'Please enter a valid value for: \"Email\"' }],"
        ));
    }

    #[test]
    fn initial_omitted_when_absent() {
        let out = render(&single()).unwrap();
        assert!(!out.contains("initialValue"));
        assert!(!out.contains("message:"));
    }

    #[test]
    fn not_required_rule() {
        let mut ctx = RenderContext::new();
        ctx.add_component(ComponentSpec::new("Notes", "notes", "<TextArea />"));
        let out = render(&ctx).unwrap();
        assert!(out.contains("rules: [{ required: false }],"));
        assert!(out.contains("label={''}"));
    }

    #[test]
    fn string_fields_are_escaped() {
        let mut ctx = RenderContext::new();
        ctx.add_component(
            ComponentSpec::new("Owner", "owner's_name", "<Input />")
                .label("Owner's name")
                .help_text("line one\nline two"),
        );
        let out = render(&ctx).unwrap();
        assert!(out.contains(r"label={'Owner\'s name'}"));
        assert!(out.contains(r"help={'line one\nline two'}"));
        assert!(out.contains(r"{getFieldDecorator('owner\'s_name', {"));
    }

    #[test]
    fn input_markup_is_verbatim() {
        let markup = "<Select onBlur={onBlur} {...inputProps} mode=\"multiple\">\n        <Option value=\"1\">One &amp; only</Option>\n      </Select>";
        let mut ctx = RenderContext::new();
        ctx.add_component(ComponentSpec::new("Tags", "tags", markup));
        let out = render(&ctx).unwrap();
        assert!(out.contains(&format!("      }})(\n        {}\n      )}}\n", markup)));
    }

    #[test]
    fn horizontal_layout_descriptor() {
        let out = render(&single()).unwrap();
        assert!(out.contains(
            "  const formItemLayout = layout === 'horizontal' ? {\n    labelCol: { xs: { span: 24 }, sm: { span: 8 } },\n    wrapperCol: { xs: { span: 24 }, sm: { span: 16 } },\n  } : {};\n"
        ));
        assert!(out.contains("      {...itemProps}\n      {...formItemLayout}\n"));
        assert!(out.contains("      colon={false}\n"));
    }

    #[test]
    fn static_props_per_component() {
        let mut ctx = single();
        ctx.add_component(ComponentSpec::new("NameField", "name", "<Input />"));
        let out = render(&ctx).unwrap();

        for name in ["EmailField", "NameField"] {
            assert!(out.contains(&format!("{}.defaultProps = {{\n  itemProps: {{}},\n", name)));
            assert!(out.contains(&format!("{}.propTypes = {{\n", name)));
        }
        assert_eq!(out.matches("  layout: 'vertical',\n").count(), 2);
        assert_eq!(
            out.matches("getFieldDecorator: PropTypes.func.isRequired,").count(),
            2
        );
        assert_eq!(out.matches("  }).isRequired,\n").count(), 2);
    }

    #[test]
    fn render_is_deterministic() {
        let mut ctx = single();
        ctx.add_import("Input", "antd/lib/input");
        ctx.add_component(ComponentSpec::new("NameField", "name", "<Input />"));
        assert_eq!(render(&ctx).unwrap(), render(&ctx).unwrap());
    }

    #[test]
    fn empty_context_fails() {
        let err = render(&RenderContext::new()).unwrap_err();
        assert!(matches!(err, CodegenError::EmptyComponents));
    }
}
