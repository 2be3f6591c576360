//! Error sinks

use crate::foundation::ErrorMessage;

/// A sink for failed constraints.
///
/// [`ValidationErrorTreeBuilder`](crate::foundation::ValidationErrorTreeBuilder)
/// is the sink used by [`FluentValidator`](crate::FluentValidator), but any
/// implementation can be handed to
/// [`Constraint::accept`](crate::constraint::Constraint::accept) or
/// [`MemberSet::add_error_messages_to`](crate::member::MemberSet::add_error_messages_to)
/// to probe constraints ad hoc.
pub trait ErrorMessageConsumer {
    /// Records one failed constraint of `member_name`.
    fn add(&mut self, member_name: &str, message: &ErrorMessage);
}

/// Collects `(member, rendered message)` pairs in reporting order.
impl ErrorMessageConsumer for Vec<(String, String)> {
    fn add(&mut self, member_name: &str, message: &ErrorMessage) {
        self.push((member_name.to_owned(), message.render()));
    }
}

impl<C: ErrorMessageConsumer + ?Sized> ErrorMessageConsumer for &mut C {
    fn add(&mut self, member_name: &str, message: &ErrorMessage) {
        (**self).add(member_name, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_consumer_keeps_order() {
        let mut sink: Vec<(String, String)> = Vec::new();
        sink.add("Name", &ErrorMessage::new("required"));
        sink.add("Age", &ErrorMessage::new("at least {0}").with_arg(18));

        assert_eq!(
            sink,
            vec![
                ("Name".to_owned(), "required".to_owned()),
                ("Age".to_owned(), "at least 18".to_owned()),
            ]
        );
    }
}
