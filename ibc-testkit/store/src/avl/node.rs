use core::borrow::Borrow;
use core::cmp;
use core::mem;

use sha2::{Digest, Sha256};

use crate::avl::as_bytes::AsBytes;
use crate::avl::proof;

/// A SHA-256 digest.
pub type Hash = [u8; 32];

pub type NodeRef<K, V> = Option<Box<AvlNode<K, V>>>;

/// A node in the AVL Tree.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AvlNode<K: Ord, V> {
    pub key: K,
    pub value: V,
    /// Digest of the node's own entry.
    pub hash: Hash,
    /// Digest of the subtree rooted at this node.
    pub merkle_hash: Hash,
    pub height: u32,
    pub left: NodeRef<K, V>,
    pub right: NodeRef<K, V>,
}

/// Wrap a key + value couple into a `NodeRef`.
pub fn as_node_ref<K: Ord + AsBytes, V>(key: K, value: V) -> NodeRef<K, V>
where
    V: Borrow<[u8]>,
{
    Some(Box::new(AvlNode::new(key, value)))
}

impl<K: Ord + AsBytes, V> AvlNode<K, V>
where
    V: Borrow<[u8]>,
{
    fn new(key: K, value: V) -> Self {
        let hash = Self::local_hash(&key, &value);
        let merkle_hash = Sha256::digest(hash).into();

        AvlNode {
            key,
            value,
            hash,
            merkle_hash,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Set the value of the current node.
    pub(crate) fn set_value(&mut self, value: V) -> V {
        self.hash = Self::local_hash(&self.key, &value);
        mem::replace(&mut self.value, value)
    }

    fn local_hash(key: &K, value: &V) -> Hash {
        let mut sha = Sha256::new();
        sha.update(proof::LEAF_PREFIX);
        sha.update(key.as_bytes());
        sha.update(value.borrow());
        sha.finalize().into()
    }

    /// The left merkle hash, if any
    pub fn left_hash(&self) -> Option<&[u8]> {
        Some(&self.left.as_ref()?.merkle_hash)
    }

    /// The right merkle hash, if any
    pub fn right_hash(&self) -> Option<&[u8]> {
        Some(&self.right.as_ref()?.merkle_hash)
    }

    fn update_height(&mut self) {
        self.height = match (&self.left, &self.right) {
            (None, None) => 0,
            (Some(child), None) | (None, Some(child)) => child.height + 1,
            (Some(left), Some(right)) => cmp::max(left.height, right.height) + 1,
        };
    }

    fn update_hashes(&mut self) {
        let mut sha = Sha256::new();
        if let Some(left) = self.left_hash() {
            sha.update(left);
        }
        sha.update(self.hash);
        if let Some(right) = self.right_hash() {
            sha.update(right);
        }
        self.merkle_hash = sha.finalize().into();
    }

    /// Refresh the node's height and merkle hash from its two children.
    pub fn update(&mut self) {
        self.update_hashes();
        self.update_height();
    }

    /// Returns the node's balance factor (left_height - right_height).
    pub fn balance_factor(&self) -> i64 {
        let height_of = |child: &NodeRef<K, V>| child.as_ref().map(|c| i64::from(c.height) + 1);
        height_of(&self.left).unwrap_or(0) - height_of(&self.right).unwrap_or(0)
    }
}
