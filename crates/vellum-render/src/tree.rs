//! The slot-chain tree renderer.
//!
//! A single resolvable node is rendered by seeding an arena of ordered result
//! slots with that node and running a resolution loop: drain every node that
//! resolves without suspending, collect the suspending ones into a batch,
//! await the whole batch concurrently, feed newly discovered nodes back into
//! the loop, and repeat until no pending work remains. The slot chain makes
//! out-of-order completion safe: every node owns one slot, and a node that
//! resolves to a sequence splices fresh slots in place without disturbing its
//! neighbors.

use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

use futures::future::{BoxFuture, join_all};
use tracing::trace;

use crate::component::{Component, ContextStep, Render, RenderResult, Resolution};
use crate::context::Context;
use crate::error::RenderError;
use crate::escape::StringFormatter;

/// One ordered result slot. `text` is `None` while the slot is pending.
struct Slot {
  text: Option<String>,
  next: Option<usize>,
}

/// A not-yet-resolved node, the context it must resolve in, and the slot that
/// will receive its output.
struct Job {
  slot: usize,
  node: Arc<dyn Render>,
  ctx: Context,
}

/// Completion of an asynchronous resolution: the slot, the context children
/// of the node must inherit, and the resolution result.
type Completion = (usize, Context, RenderResult);

pub(crate) struct TreeRenderer {
  slots: Vec<Slot>,
  sync_queue: VecDeque<Job>,
  batch: Vec<BoxFuture<'static, Completion>>,
  formatter: StringFormatter,
}

impl TreeRenderer {
  pub(crate) fn new(node: Arc<dyn Render>, ctx: Context, formatter: StringFormatter) -> Self {
    let mut renderer = Self {
      slots: vec![Slot {
        text: None,
        next: None,
      }],
      sync_queue: VecDeque::new(),
      batch: Vec::new(),
      formatter,
    };
    renderer.sync_queue.push_back(Job { slot: 0, node, ctx });
    renderer
  }

  /// Runs the resolution loop to completion and assembles the output.
  pub(crate) async fn run(mut self) -> Result<String, RenderError> {
    while !self.sync_queue.is_empty() || !self.batch.is_empty() {
      while let Some(job) = self.sync_queue.pop_front() {
        self.step(job)?;
      }

      if self.batch.is_empty() {
        continue;
      }
      let batch = mem::take(&mut self.batch);
      trace!(tasks = batch.len(), slots = self.slots.len(), "awaiting async batch");
      // Every member of the batch runs to completion; the first failure in
      // document order aborts the render afterwards, and the remaining
      // completions are simply dropped.
      for (slot, ctx, result) in join_all(batch).await {
        self.apply(slot, result?, ctx)?;
      }
    }

    Ok(self.assemble())
  }

  /// Processes one queued node: extends its context if it is a provider, then
  /// resolves it, diverting suspending work into the async batch.
  fn step(&mut self, job: Job) -> Result<(), RenderError> {
    let Job { slot, node, ctx } = job;

    let ctx = match node.extend_context() {
      None => ctx,
      Some(ContextStep::Ready(layer)) => ctx.push(layer),
      Some(ContextStep::Pending(fut)) => {
        // The extension itself suspends, so the whole node resolves in the
        // batch: await the layer, push it, then resolve.
        self.batch.push(Box::pin(async move {
          let layer = match fut.await {
            Ok(layer) => layer,
            Err(err) => return (slot, ctx, Err(err)),
          };
          let ctx = ctx.push(layer);
          let result = match node.resolve(&ctx) {
            Resolution::Ready(result) => result,
            Resolution::Pending(fut) => fut.await,
          };
          (slot, ctx, result)
        }));
        return Ok(());
      }
    };

    match node.resolve(&ctx) {
      Resolution::Ready(result) => self.apply(slot, result?, ctx),
      Resolution::Pending(fut) => {
        self
          .batch
          .push(Box::pin(async move { (slot, ctx, fut.await) }));
        Ok(())
      }
    }
  }

  /// Places a resolved component into its slot.
  ///
  /// A node result replaces the slot's occupant and is re-enqueued (the node
  /// "becomes" another node without changing position); text fills the slot;
  /// a sequence splices one slot per element in place.
  fn apply(&mut self, slot: usize, component: Component, ctx: Context) -> Result<(), RenderError> {
    match component {
      Component::Node(node) => {
        self.sync_queue.push_back(Job { slot, node, ctx });
        Ok(())
      }
      Component::Text(text) => {
        self.slots[slot].text = Some((self.formatter)(&text));
        Ok(())
      }
      Component::Raw(text) => {
        self.slots[slot].text = Some(text);
        Ok(())
      }
      Component::Nothing => {
        self.slots[slot].text = Some(String::new());
        Ok(())
      }
      Component::List(items) => self.splice(slot, items, ctx),
    }
  }

  /// Expands `slot` into one slot per sequence element, preserving the slot's
  /// position between its former neighbors.
  fn splice(&mut self, slot: usize, items: Vec<Component>, ctx: Context) -> Result<(), RenderError> {
    let mut items = items.into_iter();
    let Some(first) = items.next() else {
      self.slots[slot].text = Some(String::new());
      return Ok(());
    };

    let old_next = self.slots[slot].next;
    // The first element reuses the existing slot; the rest are chained in
    // between it and the old successor.
    let mut pending = vec![(slot, first)];
    let mut last = slot;
    for item in items {
      let idx = self.slots.len();
      self.slots.push(Slot {
        text: None,
        next: old_next,
      });
      self.slots[last].next = Some(idx);
      last = idx;
      pending.push((idx, item));
    }

    for (idx, item) in pending {
      self.apply(idx, item, ctx.clone())?;
    }
    Ok(())
  }

  /// Walks the slot chain once, in structural order.
  fn assemble(mut self) -> String {
    let mut out = String::new();
    let mut current = Some(0);
    while let Some(idx) = current {
      if let Some(text) = self.slots[idx].text.take() {
        out.push_str(&text);
      }
      current = self.slots[idx].next;
    }
    out
  }
}
