use alloy::sol;

sol! {
    // Multicall2, see config::multicall_address for deployments.
    contract Multicall2 {
        #[derive(Debug, PartialEq, Eq)]
        struct Call {
            address target;
            bytes callData;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct Result {
            bool success;
            bytes returnData;
        }

        function tryAggregate(bool requireSuccess, Call[] calls)
            public
            returns (Result[] returnData);
    }
}
