pub mod role_reconciler;
