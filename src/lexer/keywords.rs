//! The static SQL keyword table.
//!
//! ~500 lowercase reserved words, sorted for binary search. Pseudo-columns
//! (`sysdate`, `rowid`, `rownum`, `level`, `uid`, `sid`, `oid`, `systimestamp`,
//! `localtimestamp`) and common column-name-likes (`id`, `name`, `no`, `test`,
//! `null`) are deliberately absent so they tokenize as `ident`, not `keyword`.

/// Sorted list of recognized keywords (lowercase). Kept sorted so lookup can
/// binary-search it instead of building a hash map at startup.
pub const KEYWORDS: &[&str] = &[
    "abort", "absolute", "access", "action", "add", "add_months",
    "after", "aggregate", "alias", "all", "allocate", "alter",
    "analyze", "ancillary", "and", "any", "apply", "are",
    "array", "array_agg", "as", "asc", "asensitive", "assertion",
    "asymmetric", "at", "atomic", "attribute", "audit", "authid",
    "authorization", "avg", "before", "begin", "between", "bfile",
    "bigint", "binary", "binary_double", "binary_float", "bit", "bitmap",
    "blob", "body", "both", "breadth", "bulk", "by",
    "byte", "c", "cache", "call", "called", "cardinality",
    "cascade", "cascaded", "case", "cast", "chain", "char",
    "char_length", "character", "character_length", "characteristics", "check", "class",
    "clob", "close", "cluster", "clustered", "coalesce", "collate",
    "collation", "collect", "column", "column_value", "comment", "commit",
    "completion", "compound", "compress", "condition", "connect", "connect_by_root",
    "connection", "consistent", "constant", "constraint", "constraints", "constructor",
    "contains", "context", "continue", "corresponding", "count", "covar_pop",
    "covar_samp", "create", "cross", "cube", "cumulative", "current",
    "current_date", "current_path", "current_role", "current_schema", "current_time", "current_timestamp",
    "current_user", "cursor", "cycle", "data", "database", "datalink",
    "date", "day", "dbtimezone", "deallocate", "dec", "decimal",
    "declare", "default", "deferrable", "deferred", "defined", "definer",
    "degree", "delete", "delimiter", "dense_rank", "depth", "deref",
    "derived", "desc", "describe", "descriptor", "destroy", "destructor",
    "deterministic", "diagnostics", "dictionary", "disconnect", "dispatch", "distinct",
    "do", "domain", "drop", "dsinterval_unconstrained", "dynamic", "each",
    "element", "else", "elsif", "empty", "encoding", "end",
    "equals", "escape", "except", "exception", "exclude", "exclusive",
    "exec", "execute", "exists", "exit", "exp", "expire",
    "explain", "export", "extends", "external", "extract", "false",
    "fetch", "file", "filter", "final", "finish", "first",
    "first_value", "flashback_archive", "float", "floor", "following", "for",
    "force", "foreign", "found", "free", "freeze", "from",
    "full", "function", "fusion", "general", "generated", "get",
    "global", "go", "goto", "grant", "group", "grouping",
    "groups", "having", "hierarchy", "hold", "host", "hour",
    "identified", "identity", "if", "ignore", "immediate", "immutable",
    "implementation", "in", "including", "increment", "index", "indicator",
    "infinite", "inherit", "initial", "initialize", "initially", "inline",
    "inner", "inout", "input", "insensitive", "insert", "instance",
    "instantiable", "instead", "int", "integer", "intersect", "intersection",
    "interval", "into", "is", "isolation", "iterate", "java",
    "join", "key", "key_member", "key_type", "language", "large",
    "last", "last_value", "lateral", "lead", "leading", "leave",
    "left", "less", "like", "limit", "link", "listagg",
    "local", "locator", "lock", "lockinterval", "log", "logging",
    "long", "loop", "map", "match", "matched", "materialized",
    "max", "maxextents", "maxvalue", "member", "merge", "method",
    "min", "minus", "minute", "minvalue", "mod", "mode",
    "modify", "module", "month", "multiset", "names", "national",
    "natural", "nchar", "nclob", "nested", "new", "next",
    "noaudit", "nocache", "nocompress", "nocopy", "nocycle", "nologging",
    "none", "noorder", "noparallel", "normalize", "not", "nowait",
    "nullif", "number", "numeric", "nvarchar2", "object", "octet_length",
    "of", "off", "offline", "offset", "old", "on",
    "online", "only", "open", "operation", "operator", "option",
    "or", "order", "ordering", "ordinality", "others", "out",
    "outer", "output", "over", "overlaps", "overlay", "overriding",
    "package", "pad", "parallel", "parallel_enable", "parameter", "parameters",
    "partial", "partition", "pascal", "path", "pctfree", "pctused",
    "percent", "percent_rank", "percentile_cont", "percentile_disc", "perform", "pipelined",
    "pivot", "placing", "plan", "pli", "position", "power",
    "preceding", "precision", "prepare", "preserve", "primary", "prior",
    "private", "privileges", "procedure", "public", "qualify", "raise",
    "range", "rank", "raw", "read", "reads", "real",
    "recheck", "record", "recover", "recursive", "ref", "reference",
    "references", "referencing", "refresh", "regr_avgx", "regr_avgy", "regr_count",
    "regr_intercept", "regr_r2", "regr_slope", "regr_sxx", "regr_sxy", "regr_syy",
    "relative", "release", "reliance", "rename", "repeatable", "replace",
    "required", "reset", "resignal", "resource", "respect", "restart",
    "restore", "restrict", "result", "return", "returned_cardinality", "returned_length",
    "returned_octet_length", "returned_sqlstate", "returning", "returns", "revoke", "right",
    "rollback", "rollup", "routine", "row", "row_number", "rows",
    "rowtype", "savepoint", "scale", "schema", "scope", "scroll",
    "search", "second", "section", "seed", "seek", "select",
    "self", "sensitive", "sequence", "session", "session_user", "set",
    "sets", "shards", "share", "short", "show", "siblings",
    "signal", "similar", "simple", "size", "skip", "smallint",
    "some", "source", "space", "specific", "specifictype", "sql",
    "sqlcode", "sqlerrm", "sqlexception", "sqlstate", "sqlwarning", "stable",
    "standalone", "start", "state", "statement", "static", "statistics",
    "stddev", "stddev_pop", "stddev_samp", "stop", "storage", "stored",
    "stratify", "strict", "structure", "style", "submultiset", "subpartition",
    "substitutable", "substring", "subtype", "successful", "sum", "symmetric",
    "sync", "synonym", "system", "system_user", "table", "tablesample",
    "tablespace", "temporary", "terminated", "than", "then", "ties",
    "timestamp", "timezone_abbr", "timezone_hour", "timezone_minute", "timezone_region", "to",
    "trailing", "transaction", "transform", "transforms", "translate", "translation",
    "treat", "trigger", "trim", "true", "truncate", "type",
    "uescape", "unbounded", "uncommitted", "under", "undo", "union",
    "unique", "unknown", "unlimited", "unlink", "unnest", "unpivot",
    "until", "untyped", "update", "upsert", "urowid", "usage",
    "use", "user", "using", "validate", "value", "values",
    "var_pop", "var_samp", "varchar", "varchar2", "variable", "variables",
    "variance", "varray", "varying", "view", "virtual", "volatile",
    "wait", "when", "whenever", "where", "while", "width_bucket",
    "window", "with", "within", "without", "work", "write",
    "xml", "xmlagg", "xmlattributes", "xmlbinary", "xmlcast", "xmlcomment",
    "xmlconcat", "xmldocument", "xmlelement", "xmlexists", "xmlforest", "xmliterate",
    "xmlnamespaces", "xmlparse", "xmlpi", "xmlquery", "xmlroot", "xmlschema",
    "xmlserialize", "xmltable", "xmltext", "xmltype", "xmlvalidate", "year",
    "yes", "zone",
];

/// Check whether `word` (already lowercased) is a recognized keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_sorted() {
        let mut sorted = KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(KEYWORDS, sorted.as_slice());
    }

    #[test]
    fn recognizes_core_keywords() {
        assert!(is_keyword("select"));
        assert!(is_keyword("where"));
        assert!(is_keyword("partition"));
        assert!(is_keyword("by"));
    }

    #[test]
    fn excludes_pseudo_columns_and_column_likes() {
        for w in ["sysdate", "rowid", "rownum", "level", "uid", "sid", "oid",
                  "systimestamp", "localtimestamp", "id", "name", "no", "test", "null"]
        {
            assert!(!is_keyword(w), "{w} should not be a keyword");
        }
    }
}
