use core::borrow::Borrow;
use core::cmp::Ordering;

use ics23::commitment_proof::Proof;
use ics23::{CommitmentProof, ExistenceProof, HashOp, InnerOp};

use crate::avl::node::{as_node_ref, Hash, NodeRef};
use crate::avl::{proof, AsBytes};

/// An AVL Tree that supports `get` and `insert` operation and can be used to prove existence of a
/// given key-value couple.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct AvlTree<K: Ord + AsBytes, V> {
    pub root: NodeRef<K, V>,
}

impl<K: Ord + AsBytes, V: Borrow<[u8]>> AvlTree<K, V> {
    /// Return an empty AVL tree.
    pub fn new() -> Self {
        AvlTree { root: None }
    }

    /// Return the hash of the merkle tree root, if it has at least one node.
    pub fn root_hash(&self) -> Option<&Hash> {
        Some(&self.root.as_ref()?.merkle_hash)
    }

    /// Return the value corresponding to the key, if it exists.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node_ref = &self.root;
        while let Some(node) = node_ref {
            match node.key.borrow().cmp(key) {
                Ordering::Greater => node_ref = &node.left,
                Ordering::Less => node_ref = &node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Insert a value into the AVL tree, this operation runs in amortized O(log(n)).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut old_value = None;
        Self::insert_rec(&mut self.root, key, value, &mut old_value);
        old_value
    }

    fn insert_rec(node_ref: &mut NodeRef<K, V>, key: K, value: V, old_value: &mut Option<V>) {
        if let Some(node) = node_ref {
            match node.key.cmp(&key) {
                Ordering::Greater => Self::insert_rec(&mut node.left, key, value, old_value),
                Ordering::Less => Self::insert_rec(&mut node.right, key, value, old_value),
                Ordering::Equal => *old_value = Some(node.set_value(value)),
            }
            node.update();
            Self::balance_node(node_ref);
        } else {
            *node_ref = as_node_ref(key, value);
        }
    }

    /// Return an existence proof for the given element, if it exists.
    pub fn get_proof<Q>(&self, key: &Q) -> Option<CommitmentProof>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let proof = Self::get_proof_rec(key, &self.root)?;
        Some(CommitmentProof {
            proof: Some(Proof::Exist(proof)),
        })
    }

    /// Builds the existence proof bottom-up: the leaf first, then one inner
    /// step per ancestor carrying the hashes of the siblings on either side.
    fn get_proof_rec<Q>(key: &Q, node: &NodeRef<K, V>) -> Option<ExistenceProof>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = node.as_ref()?;
        let (mut proof, prefix, suffix) = match node.key.borrow().cmp(key) {
            Ordering::Greater => {
                let proof = Self::get_proof_rec(key, &node.left)?;
                let mut suffix = node.hash.to_vec();
                suffix.extend(node.right_hash().unwrap_or_default());
                (proof, vec![], suffix)
            }
            Ordering::Less => {
                let proof = Self::get_proof_rec(key, &node.right)?;
                let mut prefix = node.left_hash().unwrap_or_default().to_vec();
                prefix.extend(node.hash);
                (proof, prefix, vec![])
            }
            Ordering::Equal => {
                let proof = ExistenceProof {
                    key: node.key.as_bytes().as_ref().to_vec(),
                    value: node.value.borrow().to_vec(),
                    leaf: Some(proof::leaf_op()),
                    path: vec![],
                };
                let prefix = node.left_hash().unwrap_or_default().to_vec();
                let suffix = node.right_hash().unwrap_or_default().to_vec();
                (proof, prefix, suffix)
            }
        };
        proof.path.push(InnerOp {
            hash: HashOp::Sha256.into(),
            prefix,
            suffix,
        });
        Some(proof)
    }

    /// Rebalance the AVL tree by performing rotations, if needed.
    fn balance_node(node_ref: &mut NodeRef<K, V>) {
        let Some(node) = node_ref.as_mut() else {
            return;
        };
        let balance_factor = node.balance_factor();
        if balance_factor >= 2 {
            if node.left.as_ref().map_or(false, |left| left.balance_factor() < 0) {
                Self::rotate_left(&mut node.left);
            }
            Self::rotate_right(node_ref);
        } else if balance_factor <= -2 {
            if node.right.as_ref().map_or(false, |right| right.balance_factor() > 0) {
                Self::rotate_right(&mut node.right);
            }
            Self::rotate_left(node_ref);
        }
    }

    /// Performs a right rotation. A root without a left child is left untouched.
    pub fn rotate_right(root: &mut NodeRef<K, V>) {
        let Some(mut node) = root.take() else {
            return;
        };
        let Some(mut left) = node.left.take() else {
            *root = Some(node);
            return;
        };
        node.left = left.right.take();
        node.update();
        left.right = Some(node);
        left.update();
        *root = Some(left);
    }

    /// Performs a left rotation. A root without a right child is left untouched.
    pub fn rotate_left(root: &mut NodeRef<K, V>) {
        let Some(mut node) = root.take() else {
            return;
        };
        let Some(mut right) = node.right.take() else {
            *root = Some(node);
            return;
        };
        node.right = right.left.take();
        node.update();
        right.left = Some(node);
        right.update();
        *root = Some(right);
    }

    /// Return the keys present in the tree, in ascending order.
    pub fn get_keys(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        Self::get_keys_rec(&self.root, &mut keys);
        keys
    }

    fn get_keys_rec<'a>(node_ref: &'a NodeRef<K, V>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node_ref {
            Self::get_keys_rec(&node.left, keys);
            keys.push(&node.key);
            Self::get_keys_rec(&node.right, keys);
        }
    }
}

impl<K: Ord + AsBytes, V: Borrow<[u8]>> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
