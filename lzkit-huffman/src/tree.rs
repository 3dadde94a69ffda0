//! Prefix tree construction and code derivation.
//!
//! The tree is never transmitted. Both sides rebuild it from the same
//! frequency table, so construction must be fully deterministic: leaves
//! enter the queue in ascending symbol order (sentinel last), and the queue
//! is a binary min-heap compared on weight alone. Which of two equal
//! weights leaves first depends on where the sift steps left them, so the
//! sift order below is part of the stream format.

use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use lzkit_core::error::{LzkitError, Result};

/// Longest code the encoder can emit in one write.
pub const MAX_CODE_LENGTH: u8 = 64;

/// A node of the prefix tree, stored in an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A symbol leaf.
    Leaf {
        /// Symbol at this leaf.
        symbol: Symbol,
        /// Frequency of the symbol.
        weight: u64,
    },
    /// An interior node; children are arena indices.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Child reached on a `0` bit.
        zero: usize,
        /// Child reached on a `1` bit.
        one: usize,
    },
}

impl Node {
    /// Get the weight of this node.
    pub fn weight(&self) -> u64 {
        match *self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => weight,
        }
    }
}

/// A prefix code: the low `len` bits of `bits`, root-side bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    /// Code bits, right aligned.
    pub bits: u64,
    /// Number of bits.
    pub len: u8,
}

/// Codes for every symbol present in a tree.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Look up the code of a symbol.
    pub fn get(&self, symbol: Symbol) -> Result<Code> {
        self.codes
            .get(symbol.index())
            .copied()
            .flatten()
            .ok_or_else(|| LzkitError::invalid_header(format!("no code for {}", symbol)))
    }

    /// Iterate over present symbols and their codes.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Code)> + '_ {
        self.codes.iter().enumerate().filter_map(|(i, code)| {
            let symbol = if i < 256 {
                Symbol::Byte(i as u8)
            } else {
                Symbol::EndOfStream
            };
            code.map(|c| (symbol, c))
        })
    }
}

/// Binary min-heap of `(weight, arena index)` compared on weight only.
///
/// Push appends and sifts up past strictly heavier parents. Pop moves the
/// last entry out, walks the hole from the root down to a leaf (taking the
/// right child unless it is strictly heavier than the left), then sifts the
/// moved entry back up from there. Equal weights never swap, so ties follow
/// the heap shape rather than arrival order.
#[derive(Debug)]
struct WeightQueue {
    heap: Vec<(u64, usize)>,
}

impl WeightQueue {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, weight: u64, index: usize) {
        self.heap.push((weight, index));
        let hole = self.heap.len() - 1;
        self.sift_up(hole, (weight, index));
    }

    fn pop(&mut self) -> Option<(u64, usize)> {
        let last = self.heap.pop()?;
        let Some(&top) = self.heap.first() else {
            return Some(last);
        };
        let len = self.heap.len();

        let mut hole = 0;
        let mut child = 0;
        while child < (len - 1) / 2 {
            child = 2 * (child + 1);
            if self.heap[child].0 > self.heap[child - 1].0 {
                child -= 1;
            }
            self.heap[hole] = self.heap[child];
            hole = child;
        }
        // Even length: the last parent has only a left child.
        if len % 2 == 0 && child == (len - 2) / 2 {
            child = 2 * (child + 1);
            self.heap[hole] = self.heap[child - 1];
            hole = child - 1;
        }
        self.sift_up(hole, last);

        Some(top)
    }

    fn sift_up(&mut self, mut hole: usize, entry: (u64, usize)) {
        while hole > 0 {
            let parent = (hole - 1) / 2;
            if self.heap[parent].0 <= entry.0 {
                break;
            }
            self.heap[hole] = self.heap[parent];
            hole = parent;
        }
        self.heap[hole] = entry;
    }
}

/// A Huffman prefix tree.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<Node>,
    root: usize,
}

impl PrefixTree {
    /// Build the tree for a frequency table.
    ///
    /// The two lightest nodes are merged repeatedly; the first one taken
    /// from the queue becomes the `one` child and the second the `zero`
    /// child. A table holding only the sentinel yields a single leaf.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * Symbol::COUNT);
        let mut queue = WeightQueue::with_capacity(Symbol::COUNT);

        for (symbol, weight) in table.iter() {
            let index = nodes.len();
            nodes.push(Node::Leaf { symbol, weight });
            queue.push(weight, index);
        }

        while let Some((one_weight, one)) = queue.pop() {
            let Some((zero_weight, zero)) = queue.pop() else {
                log::trace!("prefix tree: {} nodes, root {}", nodes.len(), one);
                return Ok(Self { nodes, root: one });
            };

            let weight = one_weight
                .checked_add(zero_weight)
                .ok_or_else(|| LzkitError::invalid_header("symbol frequencies overflow"))?;

            let index = nodes.len();
            nodes.push(Node::Internal { weight, zero, one });
            queue.push(weight, index);
        }

        // The sentinel leaf is always present, so the queue is never empty.
        Err(LzkitError::invalid_header("empty frequency table"))
    }

    /// Get the root node.
    pub fn root(&self) -> &Node {
        &self.nodes[self.root]
    }

    /// Get the node at an arena index.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Get the arena index of the root.
    pub fn root_index(&self) -> usize {
        self.root
    }

    /// Number of nodes (leaves and interior).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least the sentinel leaf.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Derive the code of every leaf.
    ///
    /// Fails with `CapacityExceeded` if a leaf is deeper than
    /// [`MAX_CODE_LENGTH`].
    pub fn codes(&self) -> Result<CodeTable> {
        let mut codes = vec![None; Symbol::COUNT];
        let mut stack = vec![(self.root, Code::default())];

        while let Some((index, code)) = stack.pop() {
            match self.nodes[index] {
                Node::Leaf { symbol, .. } => codes[symbol.index()] = Some(code),
                Node::Internal { zero, one, .. } => {
                    if code.len >= MAX_CODE_LENGTH {
                        return Err(LzkitError::capacity_exceeded(
                            "code length",
                            code.len as u64 + 1,
                            MAX_CODE_LENGTH as u32,
                        ));
                    }
                    let len = code.len + 1;
                    stack.push((
                        zero,
                        Code {
                            bits: code.bits << 1,
                            len,
                        },
                    ));
                    stack.push((
                        one,
                        Code {
                            bits: (code.bits << 1) | 1,
                            len,
                        },
                    ));
                }
            }
        }

        Ok(CodeTable { codes })
    }
}
