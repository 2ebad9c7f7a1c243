/*!
 * Parallel dispatch of translation units.
 *
 * A fixed-size pool of workers drains a shared queue of units. Each worker
 * builds its own chain once and calls the retrying unit caller once per
 * unit. Results are collected by submission position, so `results[i]`
 * always corresponds to `units[i]` no matter which worker finished first.
 *
 * Per-unit failures never reach this module: they arrive as absent results.
 * What does fail the whole job is losing a worker while retrieving results,
 * or cancellation; both discard everything collected so far.
 */

use std::sync::Arc;
use futures::future::join_all;
use log::{debug, info, warn};
use tokio::sync::{Mutex, mpsc, watch};
use tokio::task::JoinHandle;

use crate::errors::TranslationError;
use super::chain::Chain;
use super::core::{RetryPolicy, TranslationResult, TranslationUnit, translate_unit};

/// Fixed-size worker pool for translating units in parallel
pub struct BatchDispatcher {
    /// Number of worker tasks; caller-supplied, never auto-detected
    workers: usize,

    /// Retry policy handed to every unit call
    retry: RetryPolicy,
}

impl BatchDispatcher {
    /// Create a dispatcher with the given pool size
    pub fn new(workers: usize) -> Self {
        BatchDispatcher {
            workers: workers.max(1),
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Translate all units, returning one result per unit in submission order
    ///
    /// `build_chain` is invoked once inside each worker; the chains are
    /// never shared across workers. `cancel` flipping to `true` tears the
    /// pool down and fails the job with `TranslationError::Cancelled`
    /// without returning any partial results. `progress` is called after
    /// each collected result with `(done, total)`.
    pub async fn dispatch<C, F, P>(
        &self,
        build_chain: F,
        units: Vec<TranslationUnit>,
        language_codes: &[String],
        mut cancel: watch::Receiver<bool>,
        progress: P,
    ) -> Result<Vec<TranslationResult>, TranslationError>
    where
        C: Chain + 'static,
        F: Fn() -> C + Clone + Send + Sync + 'static,
        P: Fn(usize, usize),
    {
        let total = units.len();
        if total == 0 {
            return Ok(Vec::new());
        }
        if *cancel.borrow() {
            return Err(TranslationError::Cancelled);
        }

        // Pre-fill the unit queue; workers drain it through a shared receiver.
        let (unit_tx, unit_rx) = mpsc::unbounded_channel::<(usize, TranslationUnit)>();
        for entry in units.into_iter().enumerate() {
            let _ = unit_tx.send(entry);
        }
        drop(unit_tx);
        let unit_rx = Arc::new(Mutex::new(unit_rx));

        let (result_tx, mut result_rx) = mpsc::unbounded_channel::<(usize, TranslationResult)>();

        let worker_count = self.workers.min(total);
        debug!("Dispatching {} units across {} workers", total, worker_count);

        let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(worker_count);
        for worker_id in 0..worker_count {
            let build_chain = build_chain.clone();
            let unit_rx = unit_rx.clone();
            let result_tx = result_tx.clone();
            let language_codes = language_codes.to_vec();
            let retry = self.retry.clone();
            let cancel = cancel.clone();

            handles.push(tokio::spawn(async move {
                // Chains hold live clients, so each worker builds its own
                // from the plain builder data instead of sharing one.
                let chain = build_chain();
                debug!("Worker {} started", worker_id);

                loop {
                    // Cancellation is observed between unit dispatches.
                    if *cancel.borrow() {
                        break;
                    }
                    let next = { unit_rx.lock().await.recv().await };
                    let Some((position, unit)) = next else {
                        break;
                    };

                    let translations = translate_unit(&chain, &unit, &language_codes, &retry).await;
                    let result = TranslationResult { index: unit.index, translations };
                    if result_tx.send((position, result)).is_err() {
                        break;
                    }
                }
                debug!("Worker {} finished", worker_id);
            }));
        }
        drop(result_tx);

        // Collect by submission position, watching for cancellation.
        let mut slots: Vec<Option<TranslationResult>> = (0..total).map(|_| None).collect();
        let mut collected = 0usize;
        let mut cancel_closed = false;

        while collected < total {
            tokio::select! {
                changed = cancel.changed(), if !cancel_closed => {
                    match changed {
                        Ok(()) if *cancel.borrow() => {
                            return Self::teardown_cancelled(handles).await;
                        }
                        Ok(()) => {}
                        Err(_) => cancel_closed = true,
                    }
                }
                received = result_rx.recv() => {
                    match received {
                        Some((position, result)) => {
                            slots[position] = Some(result);
                            collected += 1;
                            progress(collected, total);
                        }
                        None => break,
                    }
                }
            }
        }

        if *cancel.borrow() {
            return Self::teardown_cancelled(handles).await;
        }

        // Workers are done (or dead); surface panics as a collection failure.
        for join_result in join_all(handles).await {
            if let Err(e) = join_result {
                warn!("Error retrieving results: {}", e);
                return Err(TranslationError::Collection(e.to_string()));
            }
        }

        let mut results = Vec::with_capacity(total);
        for (position, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(result) => results.push(result),
                None => {
                    return Err(TranslationError::Collection(format!(
                        "No result collected for unit at position {}",
                        position
                    )));
                }
            }
        }

        Ok(results)
    }

    /// Tear down the pool after a cancellation signal
    ///
    /// In-flight and queued work is terminated immediately; nothing
    /// collected so far is returned.
    async fn teardown_cancelled(
        handles: Vec<JoinHandle<()>>,
    ) -> Result<Vec<TranslationResult>, TranslationError> {
        info!("Cancellation requested, terminating worker pool");
        for handle in &handles {
            handle.abort();
        }
        join_all(handles).await;
        Err(TranslationError::Cancelled)
    }
}
