//! Deployment-time template expressions.
//!
//! The ARM engine evaluates any JSON string of the form `[...]` as an
//! expression. Expressions are built here as a small tree and rendered in a
//! single place, so argument order, separators and quoting stay identical
//! across every fragment the crate emits.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A single-quoted string literal.
    Literal(String),
    /// A function call such as `parameters('location')`.
    Call {
        function: &'static str,
        args: Vec<Expression>,
    },
}

impl Expression {
    pub fn call(function: &'static str, args: Vec<Expression>) -> Self {
        Expression::Call { function, args }
    }

    /// Render as a complete template string, brackets included.
    pub fn template(&self) -> String {
        format!("[{}]", self)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "'{}'", value.replace('\'', "''")),
            Expression::Call { function, args } => {
                write!(f, "{}(", function)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

pub fn literal(value: impl Into<String>) -> Expression {
    Expression::Literal(value.into())
}

pub fn parameters(name: impl Into<String>) -> Expression {
    Expression::call("parameters", vec![literal(name)])
}

pub fn variables(name: impl Into<String>) -> Expression {
    Expression::call("variables", vec![literal(name)])
}

pub fn resource_id(args: Vec<Expression>) -> Expression {
    Expression::call("resourceId", args)
}

pub fn concat(args: Vec<Expression>) -> Expression {
    Expression::call("concat", args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_parameter_reference() {
        assert_eq!(
            parameters("location").template(),
            "[parameters('location')]"
        );
    }

    #[test]
    fn renders_nested_calls_with_separators() {
        let expr = resource_id(vec![
            variables("rg"),
            literal("Microsoft.Compute/images"),
            literal("img"),
        ]);

        assert_eq!(
            expr.template(),
            "[resourceId(variables('rg'), 'Microsoft.Compute/images', 'img')]"
        );
    }

    #[test]
    fn doubles_single_quotes_in_literals() {
        assert_eq!(literal("it's").to_string(), "'it''s'");
        assert_eq!(
            variables("o'neil").template(),
            "[variables('o''neil')]"
        );
    }

    #[test]
    fn renders_call_without_arguments() {
        assert_eq!(
            Expression::call("resourceGroup", vec![]).template(),
            "[resourceGroup()]"
        );
    }
}
