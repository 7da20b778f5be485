use crate::{common::error::Result, gitlab::client::GitlabClient};
use serde::Deserialize;
use tracing::info;

/// Group as returned by the GitLab REST API.
#[derive(Deserialize, Debug, Clone)]
pub struct Group {
    id: u64,
    name: String,
    parent_id: Option<u64>,
}

impl Group {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_id(&self) -> Option<u64> {
        self.parent_id
    }
}

/// Pick the group whose name matches case-insensitively under the given parent. A `None`
/// parent accepts any match, so an existing top-level group is reused wherever it lives.
pub(crate) fn find_matching<'a>(
    groups: &'a [Group],
    name: &str,
    parent_id: Option<u64>,
) -> Option<&'a Group> {
    groups.iter().find(|group| {
        group.name().eq_ignore_ascii_case(name)
            && (parent_id.is_none() || group.parent_id() == parent_id)
    })
}

/// Retrieve a group by name under the given parent, creating it if absent.
pub async fn get_or_create_group(
    client: &GitlabClient,
    name: &str,
    parent_id: Option<u64>,
) -> Result<Group> {
    let groups = client.list_groups(name).await?;
    if let Some(group) = find_matching(groups.as_slice(), name, parent_id) {
        info!(group = name, "Group found");
        return Ok(group.clone());
    }

    let group = client.create_group(name, parent_id).await?;
    info!(group = name, "Group created");
    Ok(group)
}

/// Walk an ordered chain of group names from the namespace root, creating every missing
/// segment, and return the final group's id. Already-created groups are not rolled back
/// when a later segment fails.
pub async fn ensure_group_path<I, S>(client: &GitlabClient, segments: I) -> Result<Option<u64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parent_id: Option<u64> = None;
    for segment in segments {
        let group = get_or_create_group(client, segment.as_ref(), parent_id).await?;
        parent_id = Some(group.id());
    }
    Ok(parent_id)
}

#[cfg(test)]
mod tests {
    use super::{find_matching, Group};

    fn group(id: u64, name: &str, parent_id: Option<u64>) -> Group {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "parent_id": parent_id,
        }))
        .unwrap()
    }

    #[test]
    fn match_is_case_insensitive() {
        let groups = vec![group(7, "Charts", None)];
        let found = find_matching(&groups, "charts", None).unwrap();
        assert_eq!(found.id(), 7);
    }

    #[test]
    fn match_is_scoped_to_parent() {
        let groups = vec![group(1, "payments", Some(10)), group(2, "payments", Some(20))];
        let found = find_matching(&groups, "payments", Some(20)).unwrap();
        assert_eq!(found.id(), 2);
        assert!(find_matching(&groups, "payments", Some(30)).is_none());
    }

    #[test]
    fn root_lookup_accepts_any_parent() {
        let groups = vec![group(3, "charts", Some(99))];
        assert_eq!(find_matching(&groups, "charts", None).unwrap().id(), 3);
    }

    #[test]
    fn no_match_for_unknown_name() {
        let groups = vec![group(1, "payments", None)];
        assert!(find_matching(&groups, "billing", None).is_none());
    }
}
