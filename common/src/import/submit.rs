use std::future::Future;

/// Result of a sequential bulk submission.
#[derive(Debug)]
pub struct BulkOutcome<T, E> {
    /// Records the remote service acknowledged, in submission order.
    pub created: Vec<T>,
    /// Position of each rejected candidate and the error it produced.
    pub failures: Vec<(usize, E)>,
}

impl<T, E> BulkOutcome<T, E> {
    pub fn added(&self) -> usize {
        self.created.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Message reported to the user once the batch is over.
    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            format!("Successfully added {} records", self.added())
        } else {
            format!(
                "Added {} of {} records ({} failed)",
                self.added(),
                self.added() + self.failed(),
                self.failed()
            )
        }
    }
}

/// Submits candidates one at a time, awaiting each call before the next.
///
/// A failing candidate is recorded and skipped; it never stops the batch.
pub async fn submit_sequentially<I, T, E, F, Fut>(candidates: I, mut create: F) -> BulkOutcome<T, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut outcome = BulkOutcome {
        created: Vec::new(),
        failures: Vec::new(),
    };
    for (index, candidate) in candidates.into_iter().enumerate() {
        match create(candidate).await {
            Ok(record) => outcome.created.push(record),
            Err(err) => outcome.failures.push((index, err)),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn failures_do_not_stop_the_batch() {
        let calls = RefCell::new(Vec::new());
        let outcome = block_on(submit_sequentially(1..=5, |n: u32| {
            calls.borrow_mut().push(n);
            async move {
                if n % 2 == 0 {
                    Err(format!("rejected {n}"))
                } else {
                    Ok(n * 10)
                }
            }
        }));

        assert_eq!(*calls.borrow(), [1, 2, 3, 4, 5]);
        assert_eq!(outcome.created, [10, 30, 50]);
        assert_eq!(outcome.failures, [(1, "rejected 2".to_string()), (3, "rejected 4".to_string())]);
        assert_eq!(outcome.summary(), "Added 3 of 5 records (2 failed)");
    }

    #[test]
    fn clean_batch_summary() {
        let outcome = block_on(submit_sequentially(["a", "b"], |s: &str| async move {
            Ok::<_, ()>(s.to_uppercase())
        }));
        assert_eq!(outcome.added(), 2);
        assert_eq!(outcome.failed(), 0);
        assert_eq!(outcome.summary(), "Successfully added 2 records");
    }
}
