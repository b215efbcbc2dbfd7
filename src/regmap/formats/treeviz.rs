//! Treeviz formatter for specifications

use super::registry::{FormatError, Formatter};
use crate::regmap::ast::{Declaration, FieldDecl, Parameters, RegisterDecl, Specification};

fn label(name: &str, parameters: &Parameters) -> String {
    if parameters.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, parameters)
    }
}

fn push_line(result: &mut String, prefix: &str, is_last: bool, node_type: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}: {}\n", prefix, connector, node_type, label));
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

pub fn to_treeviz_str(spec: &Specification) -> String {
    let mut result = String::new();
    let count = spec.len();
    for (i, decl) in spec.iter().enumerate() {
        append_declaration(&mut result, decl, "", i == count - 1);
    }
    result
}

fn append_declaration(result: &mut String, decl: &Declaration, prefix: &str, is_last: bool) {
    match decl {
        Declaration::Block(block) => {
            push_line(result, prefix, is_last, "Block", &label(&block.name, &block.parameters));
            append_registers(result, &block.registers, &child_prefix(prefix, is_last));
        }
        Declaration::Register(register) => append_register(result, register, prefix, is_last),
        Declaration::Field(field) => append_field(result, field, prefix, is_last),
        Declaration::Instantiation(inst) => {
            push_line(result, prefix, is_last, "Instantiation", &inst.to_string());
        }
    }
}

fn append_registers(result: &mut String, registers: &[RegisterDecl], prefix: &str) {
    for (i, register) in registers.iter().enumerate() {
        append_register(result, register, prefix, i == registers.len() - 1);
    }
}

fn append_register(result: &mut String, register: &RegisterDecl, prefix: &str, is_last: bool) {
    push_line(
        result,
        prefix,
        is_last,
        "Register",
        &label(&register.name, &register.parameters),
    );
    let new_prefix = child_prefix(prefix, is_last);
    for (i, field) in register.fields.iter().enumerate() {
        append_field(result, field, &new_prefix, i == register.fields.len() - 1);
    }
}

fn append_field(result: &mut String, field: &FieldDecl, prefix: &str, is_last: bool) {
    push_line(result, prefix, is_last, "Field", &label(&field.name, &field.parameters));
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, spec: &Specification) -> Result<String, FormatError> {
        Ok(to_treeviz_str(spec))
    }

    fn description(&self) -> &str {
        "Tree view with box-drawing connectors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regmap::ast::{BlockDecl, InstantiationDecl, ParameterName};

    #[test]
    fn test_treeviz() {
        let register = RegisterDecl::new("ctrl")
            .with_parameters([(ParameterName::Size, 4)].into_iter().collect())
            .with_field(FieldDecl::new("en"))
            .with_field(
                FieldDecl::new("mode").with_parameters([(ParameterName::Lsb, 1)].into_iter().collect()),
            );
        let spec = Specification::new(vec![
            Declaration::Block(BlockDecl::new("uart").with_register(register)),
            Declaration::Instantiation(InstantiationDecl::new("uart", "uart0")),
        ]);

        let expected = "\
├─ Block: uart
│ └─ Register: ctrl (size=4)
│   ├─ Field: en
│   └─ Field: mode (lsb=1)
└─ Instantiation: uart uart0
";
        assert_eq!(to_treeviz_str(&spec), expected);
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_treeviz_str(&Specification::default()), "");
    }
}
