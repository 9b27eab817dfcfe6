use super::{MoveItemsResult, MoveOutcome};
use crate::request::ensure_dir_path;

impl crate::Client {
    /// Moves the matching files of a source folder into a destination
    /// folder.
    ///
    /// Lists the source folder's children and returns
    /// [`MoveItemsResult::NoChildren`] without any move request when there
    /// are none. Otherwise the destination folder is pre-created best-effort
    /// (outcome ignored, as for [`move_item`](crate::Client::move_item));
    /// the children are filtered locally to the non-folder entries whose
    /// base name satisfies `filter`, and one move request per match is
    /// issued, all in flight concurrently with no ordering guarantee.
    ///
    /// Each file gets its own entry in the result; a failed move neither
    /// aborts the others nor rolls back the ones already completed.
    pub async fn move_items<F>(
        &self,
        src_repo: &str,
        src_dir: &str,
        filter: F,
        dst_repo: &str,
        dst_dir: &str,
        dry_run: bool,
    ) -> crate::Result<MoveItemsResult>
    where
        F: Fn(&str) -> bool,
    {
        let src_dir = ensure_dir_path(src_dir);
        let dst_dir = ensure_dir_path(dst_dir);
        let info = self.get_folder_info(src_repo, &src_dir).await?;
        let children = info.children.unwrap_or_default();
        if children.is_empty() {
            tracing::info!("{src_repo}/{src_dir} has no children, nothing to move");
            return Ok(MoveItemsResult::NoChildren);
        }
        if let Err(err) = self.create_folder(dst_repo, &dst_dir).await {
            tracing::warn!("ignoring destination pre-creation failure: {err}");
        }
        let names: Vec<String> = children
            .iter()
            .filter(|child| !child.folder && filter(child.name()))
            .map(|child| child.name().to_string())
            .collect();
        let moves = names.iter().map(|name| {
            let src_path = format!("{src_dir}{name}");
            let dst_dir = dst_dir.as_str();
            async move {
                self.raw_move(src_repo, &src_path, dst_repo, dst_dir, dry_run)
                    .await
            }
        });
        let results = futures::future::join_all(moves).await;
        Ok(MoveItemsResult::Moved(
            names
                .into_iter()
                .zip(results)
                .map(|(name, result)| MoveOutcome { name, result })
                .collect(),
        ))
    }
}
