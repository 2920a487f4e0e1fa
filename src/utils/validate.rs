use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::core::error::Error;
use crate::types::response::{Constraint, FieldErrors};

pub(crate) fn check<T: Validate>(data: &T) -> Result<(), Error> {
    data.validate()
        .map_err(|e| Error::Unprocessable(map_validation_errors(&e)))
}

pub(crate) fn map_validation_errors(errors: &ValidationErrors) -> Vec<FieldErrors> {
    let mut fields = errors
        .errors()
        .iter()
        .map(|(property, kind)| FieldErrors {
            property: property.to_string(),
            constraints: map_kind(kind),
        })
        .collect::<Vec<_>>();

    fields.sort_by(|a, b| a.property.cmp(&b.property));

    fields
}

fn map_kind(kind: &ValidationErrorsKind) -> Vec<Constraint> {
    match kind {
        ValidationErrorsKind::Field(errors) => errors
            .iter()
            .map(|error| {
                Constraint::Message(
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                )
            })
            .collect(),
        ValidationErrorsKind::Struct(nested) => map_validation_errors(nested)
            .into_iter()
            .map(Constraint::Nested)
            .collect(),
        ValidationErrorsKind::List(items) => items
            .iter()
            .map(|(index, nested)| {
                Constraint::Nested(FieldErrors {
                    property: index.to_string(),
                    constraints: map_validation_errors(nested)
                        .into_iter()
                        .map(Constraint::Nested)
                        .collect(),
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::request::SignUpData;

    #[test]
    fn valid_data_passes() {
        let data = SignUpData {
            username: "alice".into(),
            password: "correcthorse".into(),
        };

        assert!(check(&data).is_ok());
    }

    #[test]
    fn failing_fields_are_mapped_with_constraints() {
        let data = SignUpData {
            username: "ab".into(),
            password: "short".into(),
        };

        let fields = match check(&data) {
            Err(Error::Unprocessable(fields)) => fields,
            other => panic!("expected validation failure, got {:?}", other),
        };

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].property, "password");
        assert_eq!(
            fields[0].constraints,
            vec![Constraint::Message(
                "password must be at least 8 characters".into()
            )]
        );
        assert_eq!(fields[1].property, "username");
    }

    #[test]
    fn nested_failures_are_mapped_recursively() {
        #[derive(Validate)]
        struct Inner {
            #[validate(range(min = 18, message = "age must be at least 18"))]
            age: i16,
        }

        #[derive(Validate)]
        struct Outer {
            #[validate(nested)]
            profile: Inner,
        }

        let data = Outer {
            profile: Inner { age: 12 },
        };

        let errors = data.validate().unwrap_err();
        let fields = map_validation_errors(&errors);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].property, "profile");

        match &fields[0].constraints[0] {
            Constraint::Nested(nested) => {
                assert_eq!(nested.property, "age");
                assert_eq!(
                    nested.constraints,
                    vec![Constraint::Message("age must be at least 18".into())]
                );
            }
            other => panic!("expected nested constraint, got {:?}", other),
        }
    }
}
