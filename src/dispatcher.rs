//! Bounded concurrent work dispatch
//!
//! A [`WorkDispatcher`] owns a fixed pool of worker tasks fed from a bounded
//! queue of typed work units. Each unit is received by exactly one worker,
//! which runs the shared task function on it and publishes a [`WorkResult`]
//! to an unbounded result channel. Results arrive in completion order.
//!
//! Used to drive bursts of API calls (create, associate, list) against a
//! backend that throttles unbounded parallelism.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo(client: ccctl::CcClient, token: String) -> ccctl::Result<()> {
//! use ccctl::WorkDispatcher;
//!
//! let names: Vec<String> = (0..150).map(|i| format!("user-{}", i)).collect();
//! let dispatcher = WorkDispatcher::new(10, move |name: String| {
//!     let client = client.clone();
//!     let token = token.clone();
//!     async move { client.create_user(&name, &token).await }
//! })?;
//! let results = dispatcher.process_all(names).await?;
//! assert_eq!(results.len(), 150);
//! # Ok(())
//! # }
//! ```

use futures::future::join_all;
use futures::FutureExt;
use log::debug;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use crate::error::{CcError, Result};

/// Why a single unit of work did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError<E> {
    /// The task returned an error
    Failed(E),
    /// The task panicked; the worker survived and kept going
    Panicked(String),
}

impl<E: fmt::Display> fmt::Display for TaskError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::Failed(e) => write!(f, "{}", e),
            TaskError::Panicked(msg) => write!(f, "task panicked: {}", msg),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for TaskError<E> {}

/// Outcome of one unit of work, paired with the unit itself
#[derive(Debug)]
pub struct WorkResult<U, T, E> {
    pub unit: U,
    pub outcome: std::result::Result<T, TaskError<E>>,
}

impl<U, T, E> WorkResult<U, T, E> {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The failure, if the unit did not succeed
    pub fn error(&self) -> Option<&TaskError<E>> {
        self.outcome.as_ref().err()
    }
}

/// Fixed-size worker pool with a bounded work queue and an unbounded result stream
pub struct WorkDispatcher<U, T, E> {
    work_tx: Option<mpsc::Sender<U>>,
    results_rx: mpsc::UnboundedReceiver<WorkResult<U, T, E>>,
    workers: Vec<JoinHandle<()>>,
}

impl<U, T, E> WorkDispatcher<U, T, E>
where
    U: Clone + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Start `worker_count` workers with a queue holding `worker_count` pending units
    ///
    /// Must be called from within a tokio runtime.
    pub fn new<F, Fut>(worker_count: usize, task: F) -> Result<Self>
    where
        F: Fn(U) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    {
        Self::with_queue_capacity(worker_count, worker_count, task)
    }

    /// Start `worker_count` workers with an explicit work queue capacity
    ///
    /// `submit` waits while the queue is full; results are never bounded.
    pub fn with_queue_capacity<F, Fut>(
        worker_count: usize,
        queue_capacity: usize,
        task: F,
    ) -> Result<Self>
    where
        F: Fn(U) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    {
        if worker_count == 0 {
            return Err(CcError::Dispatcher(
                "worker count must be positive".to_string(),
            ));
        }
        if queue_capacity == 0 {
            return Err(CcError::Dispatcher(
                "queue capacity must be positive".to_string(),
            ));
        }

        let (work_tx, work_rx) = mpsc::channel::<U>(queue_capacity);
        let work_rx = Arc::new(Mutex::new(work_rx));
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let task = Arc::new(task);

        let workers = (0..worker_count)
            .map(|id| {
                let work_rx = Arc::clone(&work_rx);
                let results_tx = results_tx.clone();
                let task = Arc::clone(&task);
                tokio::spawn(run_worker(id, work_rx, results_tx, task))
            })
            .collect();

        debug!(
            "Started {} workers (queue capacity {})",
            worker_count, queue_capacity
        );

        Ok(Self {
            work_tx: Some(work_tx),
            results_rx,
            workers,
        })
    }

    /// Number of workers in the pool
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Queue one unit of work, waiting while the queue is full
    pub async fn submit(&self, unit: U) -> Result<()> {
        let work_tx = self
            .work_tx
            .as_ref()
            .ok_or_else(|| CcError::Dispatcher("work queue is closed".to_string()))?;
        work_tx
            .send(unit)
            .await
            .map_err(|_| CcError::Dispatcher("all workers have stopped".to_string()))
    }

    /// Stop accepting work; workers finish the queued units and exit
    pub fn close(&mut self) {
        if self.work_tx.take().is_some() {
            debug!("Work queue closed");
        }
    }

    /// Wait for the next finished unit
    ///
    /// Returns `None` once the queue is closed, every worker has exited, and
    /// all results have been consumed.
    pub async fn next_result(&mut self) -> Option<WorkResult<U, T, E>> {
        self.results_rx.recv().await
    }

    /// Wait for `count` results (fewer only if the pool shut down first)
    pub async fn collect(&mut self, count: usize) -> Vec<WorkResult<U, T, E>> {
        let mut results = Vec::with_capacity(count);
        while results.len() < count {
            match self.next_result().await {
                Some(result) => results.push(result),
                None => break,
            }
        }
        results
    }

    /// Close the queue, drain every outstanding result, and wait for workers to exit
    pub async fn join(mut self) -> Vec<WorkResult<U, T, E>> {
        self.close();
        let mut results = Vec::new();
        while let Some(result) = self.next_result().await {
            results.push(result);
        }
        for joined in join_all(std::mem::take(&mut self.workers)).await {
            if let Err(e) = joined {
                debug!("Worker ended abnormally: {}", e);
            }
        }
        results
    }

    /// Submit every unit, then close and wait for all results
    pub async fn process_all<I>(self, units: I) -> Result<Vec<WorkResult<U, T, E>>>
    where
        I: IntoIterator<Item = U>,
    {
        let mut submitted = 0usize;
        for unit in units {
            self.submit(unit).await?;
            submitted += 1;
        }
        debug!("Submitted {} units", submitted);
        Ok(self.join().await)
    }
}

async fn run_worker<U, T, E, F, Fut>(
    id: usize,
    work_rx: Arc<Mutex<mpsc::Receiver<U>>>,
    results_tx: mpsc::UnboundedSender<WorkResult<U, T, E>>,
    task: Arc<F>,
) where
    U: Clone,
    F: Fn(U) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    loop {
        // Lock only while waiting for a unit so exactly one worker takes each
        let unit = { work_rx.lock().await.recv().await };
        let Some(unit) = unit else {
            debug!("Worker {} exiting: queue closed", id);
            break;
        };

        // The closure call sits inside the future so a synchronous panic is caught too
        let work = unit.clone();
        let task = &task;
        let outcome = match AssertUnwindSafe(async move { task(work).await })
            .catch_unwind()
            .await
        {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(TaskError::Failed(e)),
            Err(panic) => Err(TaskError::Panicked(panic_message(panic.as_ref()))),
        };

        if results_tx.send(WorkResult { unit, outcome }).is_err() {
            debug!("Worker {} exiting: result receiver dropped", id);
            break;
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
