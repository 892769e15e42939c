use std::fmt;

/// Collections exposed by the danceconvention.net `eventinfo` REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DcnetResource {
    /// Contests of an event, keyed by event id
    Contests,
    /// Signups of an event, keyed by event id
    Signups,
    Leaders,
    Followers,
    Couples,
    SeekingLeaders,
    SeekingFollowers,
}

impl DcnetResource {
    pub const ALL: [DcnetResource; 7] = [
        DcnetResource::Contests,
        DcnetResource::Signups,
        DcnetResource::Leaders,
        DcnetResource::Followers,
        DcnetResource::Couples,
        DcnetResource::SeekingLeaders,
        DcnetResource::SeekingFollowers,
    ];

    /// Logical name of the resource
    pub fn name(&self) -> &'static str {
        match self {
            DcnetResource::Contests => "contests",
            DcnetResource::Signups => "signups",
            DcnetResource::Leaders => "leaders",
            DcnetResource::Followers => "followers",
            DcnetResource::Couples => "couples",
            DcnetResource::SeekingLeaders => "seeking leaders",
            DcnetResource::SeekingFollowers => "seeking followers",
        }
    }

    /// Look up a resource by its logical name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Path template relative to the REST base, `{}` marks the id
    fn template(&self) -> &'static str {
        match self {
            DcnetResource::Contests => "{}/contests",
            DcnetResource::Signups => "{}/signups",
            DcnetResource::Leaders => "signups/{}/leaders",
            DcnetResource::Followers => "signups/{}/follows",
            DcnetResource::Couples => "signups/{}/couples",
            DcnetResource::SeekingLeaders => "signups/{}/seeking/leaders",
            DcnetResource::SeekingFollowers => "signups/{}/seeking/follows",
        }
    }

    /// Build the fully qualified URL of this resource for `id`
    pub fn resolve(&self, base_url: &str, id: &str) -> String {
        let path = self
            .template()
            .replacen("{}", &urlencoding::encode(id), 1);
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }
}

impl fmt::Display for DcnetResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a resource given by name. Unrecognised names resolve to nothing.
pub fn resolve_by_name(name: &str, base_url: &str, id: &str) -> Option<String> {
    DcnetResource::from_name(name).map(|resource| resource.resolve(base_url, id))
}
