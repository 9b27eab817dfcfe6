use super::MoveReport;

impl crate::Client {
    /// Moves a file or folder to another repository path.
    ///
    /// Two modes, decided by the destination path:
    ///
    /// - ends in a separator: the item is moved *into* that folder, which is
    ///   pre-created best-effort beforehand — the pre-creation outcome is
    ///   deliberately ignored, "already exists" included, since the move
    ///   itself will report anything that matters;
    /// - no trailing separator: the destination is the exact new path
    ///   (rename mode), no pre-creation is attempted.
    ///
    /// Issues `POST /api/move/{srcRepo}/{srcPath}?to=/{dstRepo}/{dstPath}`,
    /// with `dry=1` appended when `dry_run` is set so the server validates
    /// without mutating anything. Succeeds only on a 200 response.
    pub async fn move_item(
        &self,
        src_repo: &str,
        src_path: &str,
        dst_repo: &str,
        dst_path: &str,
        dry_run: bool,
    ) -> crate::Result<MoveReport> {
        if dst_path.ends_with('/') {
            if let Err(err) = self.create_folder(dst_repo, dst_path).await {
                tracing::warn!("ignoring destination pre-creation failure: {err}");
            }
        }
        self.raw_move(src_repo, src_path, dst_repo, dst_path, dry_run)
            .await
    }

    /// The move request itself, shared with the bulk operation.
    pub(crate) async fn raw_move(
        &self,
        src_repo: &str,
        src_path: &str,
        dst_repo: &str,
        dst_path: &str,
        dry_run: bool,
    ) -> crate::Result<MoveReport> {
        let to = format!("/{}/{}", dst_repo, dst_path.trim_start_matches('/'));
        let mut query = vec![("to", to.as_str())];
        if dry_run {
            query.push(("dry", "1"));
        }
        self.post_ok(self.move_url(src_repo, src_path), &query)
            .await
            .map(|report| report.unwrap_or_else(MoveReport::empty))
    }
}
